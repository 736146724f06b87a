//! External preview manager
//!
//! Keeps one externally rendered surface in sync with an editable buffer it
//! does not own. The manager is a two-state machine:
//!
//! - `Closed`: no surface handle, no timers armed.
//! - `Open`: a surface handle is held, the liveness poll is armed, and a
//!   debounced push may be pending.
//!
//! Timers are deadlines owned by the manager instance. The host's event loop
//! calls [`PreviewManager::tick`] with the current time, and can ask
//! [`PreviewManager::next_deadline`] when it next needs to wake up. Several
//! managers can run side by side without sharing any state.
//!
//! Nothing here ever fails outward: a refused provisioning leaves the manager
//! closed, a failing write is treated as the surface having been closed, and
//! errors from close requests are swallowed.

pub mod document;
pub mod file;
pub mod host;

pub use document::render_document;
pub use file::{FileHost, FileSurface};
pub use host::{PreviewHost, PreviewSurface};

use crate::mode::Mode;
use std::time::{Duration, Instant};

/// Timing and presentation settings for a preview session.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// Period of the liveness poll
    pub poll_interval: Duration,
    /// Quiet period before a content change is pushed
    pub debounce: Duration,
    /// Title of the generated document
    pub title: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1000),
            debounce: Duration::from_millis(300),
            title: "Preview".to_string(),
        }
    }
}

pub struct PreviewManager<H: PreviewHost> {
    host: H,
    surface: Option<H::Surface>,
    options: PreviewOptions,
    content: String,
    mode: Mode,
    poll_deadline: Option<Instant>,
    push_deadline: Option<Instant>,
}

impl<H: PreviewHost> PreviewManager<H> {
    pub fn new(host: H, options: PreviewOptions) -> Self {
        Self {
            host,
            surface: None,
            options,
            content: String::new(),
            mode: Mode::default(),
            poll_deadline: None,
            push_deadline: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The surface currently held, if any.
    pub fn surface(&self) -> Option<&H::Surface> {
        self.surface.as_ref()
    }

    /// True while a surface handle is held.
    ///
    /// After a poll tick has run this is never true for a surface that is no
    /// longer live.
    pub fn is_external_open(&self) -> bool {
        self.surface.is_some()
    }

    /// The earliest armed deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.poll_deadline, self.push_deadline) {
            (Some(poll), Some(push)) => Some(poll.min(push)),
            (poll, push) => poll.or(push),
        }
    }

    /// Open the preview surface and push the current content into it.
    ///
    /// A no-op while a live surface is held. A held surface that is no longer
    /// live is dropped and replaced. If the host refuses to provision, the
    /// manager stays closed.
    pub fn open_preview(&mut self, now: Instant) {
        match &self.surface {
            Some(surface) if surface.is_live() => return,
            Some(_) => {
                tracing::debug!("held preview surface is gone, provisioning a new one");
                self.detach();
            }
            None => {}
        }

        let Some(surface) = self.host.provision(&self.options.title) else {
            tracing::debug!("preview surface was not provisioned");
            return;
        };

        tracing::debug!("preview opened");
        self.surface = Some(surface);
        self.poll_deadline = Some(now + self.options.poll_interval);
        self.push_deadline = None;
        self.push();
    }

    /// Close the preview surface. A no-op when closed.
    pub fn close_preview(&mut self) {
        let Some(mut surface) = self.surface.take() else {
            return;
        };

        if let Err(err) = surface.close() {
            tracing::debug!(error = %err, "ignoring error while closing preview surface");
        }
        self.poll_deadline = None;
        self.push_deadline = None;
        tracing::debug!("preview closed");
    }

    /// Run whatever timers have expired at `now`.
    ///
    /// The liveness poll runs before a pending push, so a surface closed by
    /// the user is never written to again.
    pub fn tick(&mut self, now: Instant) {
        if self.poll_deadline.is_some_and(|deadline| now >= deadline) {
            self.poll(now);
        }

        if self.push_deadline.is_some_and(|deadline| now >= deadline) {
            self.push_deadline = None;
            self.push();
        }
    }

    /// Replace the content and schedule a debounced push.
    ///
    /// The content is always stored so a later open shows it; the push is
    /// only scheduled while open. Each call moves the deadline, so a burst of
    /// updates produces one push carrying the last content.
    pub fn update_content(&mut self, content: impl Into<String>, now: Instant) {
        self.content = content.into();
        self.schedule_push(now);
    }

    /// Report the buffer's current content and mode, scheduling a push only
    /// if either differs from what was last seen. Returns whether anything
    /// changed.
    pub fn observe(&mut self, content: &str, mode: Mode, now: Instant) -> bool {
        if content == self.content && mode == self.mode {
            return false;
        }

        if content != self.content {
            self.content = content.to_string();
        }
        self.mode = mode;
        self.schedule_push(now);
        true
    }

    /// Change the mode the content is interpreted in, scheduling a push if it
    /// differs.
    pub fn set_mode(&mut self, mode: Mode, now: Instant) {
        if mode != self.mode {
            self.mode = mode;
            self.schedule_push(now);
        }
    }

    /// Close immediately, skipping any pending push.
    pub fn teardown(&mut self) {
        self.close_preview();
    }

    fn schedule_push(&mut self, now: Instant) {
        if self.is_external_open() {
            self.push_deadline = Some(now + self.options.debounce);
        }
    }

    fn poll(&mut self, now: Instant) {
        let live = self.surface.as_ref().is_some_and(|surface| surface.is_live());
        if live {
            self.poll_deadline = Some(now + self.options.poll_interval);
        } else {
            tracing::debug!("preview surface closed externally");
            self.detach();
        }
    }

    /// Regenerate the document and write-replace it into the surface.
    fn push(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let document = render_document(&self.content, self.mode, &self.options);
        let result = surface
            .begin_write()
            .and_then(|_| surface.write(&document))
            .and_then(|_| surface.finish_write());

        match result {
            Ok(()) => tracing::debug!(bytes = document.len(), "pushed preview document"),
            Err(err) => {
                tracing::warn!(error = %err, "preview write failed, treating surface as closed");
                self.detach();
            }
        }
    }

    /// Forget the surface without asking it to close.
    fn detach(&mut self) {
        self.surface = None;
        self.poll_deadline = None;
        self.push_deadline = None;
    }
}

impl<H: PreviewHost> Drop for PreviewManager<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
