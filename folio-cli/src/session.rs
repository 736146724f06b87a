//! Live preview session: the event loop behind `folio preview`.
//!
//! The loop re-reads the input on a fixed interval, reports it to the preview
//! manager and ticks the manager's timers. It sleeps until whichever comes
//! first, the next re-read or the manager's next deadline.

use folio_babel::preview::FileHost;
use folio_babel::{Mode, PreviewManager};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// What to watch and how often.
#[derive(Debug, Clone)]
pub struct Watch {
    pub input: PathBuf,
    pub mode: Mode,
    pub interval: Duration,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The preview file was deleted.
    PreviewClosed,
    /// The input file is gone or unreadable.
    InputRemoved,
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEnd::PreviewClosed => f.write_str("Preview closed"),
            SessionEnd::InputRemoved => f.write_str("Input file removed, preview closed"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Error reading file '{}': {}", .0.display(), .1)]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Could not create a preview file in '{}'", .0.display())]
    NotOpened(PathBuf),
}

/// Run a preview session until the preview or the input goes away.
///
/// `on_open` is called once with the preview file's path.
pub fn run(
    manager: &mut PreviewManager<FileHost>,
    watch: &Watch,
    on_open: impl FnOnce(&Path),
) -> Result<SessionEnd, SessionError> {
    let content =
        fs::read_to_string(&watch.input).map_err(|e| SessionError::Read(watch.input.clone(), e))?;

    let now = Instant::now();
    manager.observe(&content, watch.mode, now);
    manager.open_preview(now);

    let Some(surface) = manager.surface() else {
        return Err(SessionError::NotOpened(manager.host().dir().to_path_buf()));
    };
    on_open(surface.path());
    tracing::info!(input = %watch.input.display(), mode = %watch.mode, "preview session started");

    let mut next_read = now + watch.interval;
    let end = loop {
        let wake = manager
            .next_deadline()
            .map_or(next_read, |deadline| deadline.min(next_read));
        let now = Instant::now();
        if wake > now {
            std::thread::sleep(wake - now);
        }

        let now = Instant::now();
        if now >= next_read {
            next_read = now + watch.interval;
            match fs::read_to_string(&watch.input) {
                Ok(content) => {
                    if manager.observe(&content, watch.mode, now) {
                        tracing::debug!(bytes = content.len(), "input changed");
                    }
                }
                Err(err) => {
                    tracing::info!(error = %err, "input no longer readable");
                    break SessionEnd::InputRemoved;
                }
            }
        }

        manager.tick(now);
        if !manager.is_external_open() {
            break SessionEnd::PreviewClosed;
        }
    };

    manager.close_preview();
    Ok(end)
}
