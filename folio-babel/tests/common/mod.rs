//! Shared helpers for the integration tests.

use folio_babel::error::SurfaceError;
use folio_babel::preview::{PreviewHost, PreviewSurface};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the recording host and its surfaces have been asked to do.
#[derive(Debug, Default)]
pub struct Recording {
    pub provisions: usize,
    pub closes: usize,
    /// Complete documents, one per finished write.
    pub writes: Vec<String>,
    /// Liveness reported by the current surface.
    pub live: bool,
    /// When set, the host refuses to provision.
    pub refuse: bool,
    /// When set, `write` fails as if the surface vanished mid-push.
    pub fail_writes: bool,
}

/// A [`PreviewHost`] whose surfaces only record what happens to them.
///
/// The recording is shared through `Rc<RefCell<_>>` so tests can keep a handle
/// after the host moves into a manager.
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    pub log: Rc<RefCell<Recording>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct RecordingSurface {
    log: Rc<RefCell<Recording>>,
    buffer: String,
}

impl PreviewHost for RecordingHost {
    type Surface = RecordingSurface;

    fn provision(&mut self, _title: &str) -> Option<RecordingSurface> {
        let mut log = self.log.borrow_mut();
        log.provisions += 1;
        if log.refuse {
            return None;
        }
        log.live = true;
        Some(RecordingSurface {
            log: self.log.clone(),
            buffer: String::new(),
        })
    }
}

impl PreviewSurface for RecordingSurface {
    fn begin_write(&mut self) -> Result<(), SurfaceError> {
        self.buffer.clear();
        Ok(())
    }

    fn write(&mut self, chunk: &str) -> Result<(), SurfaceError> {
        if self.log.borrow().fail_writes {
            return Err(SurfaceError::Gone);
        }
        self.buffer.push_str(chunk);
        Ok(())
    }

    fn finish_write(&mut self) -> Result<(), SurfaceError> {
        self.log.borrow_mut().writes.push(std::mem::take(&mut self.buffer));
        Ok(())
    }

    fn is_live(&self) -> bool {
        self.log.borrow().live
    }

    fn close(&mut self) -> Result<(), SurfaceError> {
        let mut log = self.log.borrow_mut();
        log.closes += 1;
        if !log.live {
            return Err(SurfaceError::Gone);
        }
        log.live = false;
        Ok(())
    }
}
