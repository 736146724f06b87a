//! File-backed preview host
//!
//! Each surface is a standalone HTML file in a directory, optionally opened in
//! the system browser after its first complete write. Writes go to a temporary
//! file in the same directory which then replaces the document in one rename,
//! so a reloading viewer never sees a half-written page.
//!
//! The surface counts as live for as long as its file exists. Deleting the
//! file is how a user closes the preview from outside.

use super::host::{PreviewHost, PreviewSurface};
use crate::error::SurfaceError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Provisions [`FileSurface`]s inside one directory.
#[derive(Debug, Clone)]
pub struct FileHost {
    dir: PathBuf,
    open_browser: bool,
}

impl FileHost {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            open_browser: false,
        }
    }

    /// Open each surface in the system browser after its first write.
    ///
    /// Only has an effect with the `browser` feature enabled.
    pub fn with_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PreviewHost for FileHost {
    type Surface = FileSurface;

    fn provision(&mut self, title: &str) -> Option<FileSurface> {
        if let Err(err) = std::fs::create_dir_all(&self.dir) {
            tracing::warn!(dir = %self.dir.display(), error = %err, "cannot create preview directory");
            return None;
        }

        let prefix = format!("{}-", slug(title));
        let created = Builder::new()
            .prefix(&prefix)
            .suffix(".html")
            .tempfile_in(&self.dir)
            .and_then(|file| file.keep().map_err(|err| err.error));

        match created {
            Ok((_, path)) => {
                tracing::debug!(path = %path.display(), "provisioned preview file");
                Some(FileSurface {
                    path,
                    buffer: None,
                    open_browser: self.open_browser,
                    launched: false,
                })
            }
            Err(err) => {
                tracing::warn!(dir = %self.dir.display(), error = %err, "cannot create preview file");
                None
            }
        }
    }
}

/// A preview document on disk.
#[derive(Debug)]
pub struct FileSurface {
    path: PathBuf,
    buffer: Option<String>,
    open_browser: bool,
    launched: bool,
}

impl FileSurface {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    #[cfg(feature = "browser")]
    fn launch(&mut self) {
        if !self.open_browser || self.launched {
            return;
        }
        self.launched = true;
        if let Err(err) = open::that(&self.path) {
            tracing::warn!(path = %self.path.display(), error = %err, "cannot open preview in browser");
        }
    }

    #[cfg(not(feature = "browser"))]
    fn launch(&mut self) {
        if self.open_browser && !self.launched {
            self.launched = true;
            tracing::debug!("built without the `browser` feature, not opening a browser");
        }
    }
}

impl PreviewSurface for FileSurface {
    fn begin_write(&mut self) -> Result<(), SurfaceError> {
        if !self.is_live() {
            return Err(SurfaceError::Gone);
        }
        self.buffer = Some(String::new());
        Ok(())
    }

    fn write(&mut self, chunk: &str) -> Result<(), SurfaceError> {
        let buffer = self.buffer.as_mut().ok_or(SurfaceError::Gone)?;
        buffer.push_str(chunk);
        Ok(())
    }

    fn finish_write(&mut self) -> Result<(), SurfaceError> {
        let document = self.buffer.take().ok_or(SurfaceError::Gone)?;
        if !self.is_live() {
            return Err(SurfaceError::Gone);
        }

        let mut staged = NamedTempFile::new_in(self.dir())?;
        staged.write_all(document.as_bytes())?;
        staged.flush()?;
        staged
            .persist(&self.path)
            .map_err(|err| SurfaceError::Persist(err.to_string()))?;

        self.launch();
        Ok(())
    }

    fn is_live(&self) -> bool {
        self.path.exists()
    }

    fn close(&mut self) -> Result<(), SurfaceError> {
        self.buffer = None;
        std::fs::remove_file(&self.path)?;
        Ok(())
    }
}

/// File-name friendly version of a document title.
fn slug(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();

    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "preview".to_string()
    } else {
        slug
    }
}
