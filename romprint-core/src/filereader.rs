//! Pluggable file I/O backend.
//!
//! Frontends that keep ROMs inside archives or on virtual filesystems can
//! install their own [`FileSource`]; everything in the library reads files
//! through [`open_file`]. With nothing installed, a stdio-backed default is
//! used. Handles are plain [`ReadSeek`] trait objects, so 64-bit seek/tell
//! come from `std::io` and closing happens on drop — there is no close hook
//! to forget on an error path.

use std::fs::File;
use std::io::{self, Read, Seek};
use std::sync::{Arc, RwLock};

use crate::error::HashError;
use crate::messages::verbose_with;
use crate::path;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Backend that resolves a path string to a readable, seekable handle.
///
/// Implementations own the interpretation of the path; the library never
/// inspects it beyond filename/extension string operations.
pub trait FileSource: Send + Sync {
    fn open(&self, path: &str) -> io::Result<Box<dyn ReadSeek + Send>>;
}

/// Default backend mapping paths straight to the host filesystem.
struct StdioFileSource;

impl FileSource for StdioFileSource {
    fn open(&self, path: &str) -> io::Result<Box<dyn ReadSeek + Send>> {
        let file = File::open(path)?;
        Ok(Box::new(file))
    }
}

static FILE_SOURCE: RwLock<Option<Arc<dyn FileSource>>> = RwLock::new(None);

/// Install a custom file backend; `None` restores the stdio default.
///
/// Not safe to call while hashing is in flight.
pub fn set_file_source(source: Option<Arc<dyn FileSource>>) {
    *FILE_SOURCE.write().unwrap_or_else(|e| e.into_inner()) = source;
}

/// Open a file through the installed backend (or the stdio default).
pub fn open_file(path: &str) -> Result<Box<dyn ReadSeek + Send>, HashError> {
    let source = FILE_SOURCE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone();

    let result = match source {
        Some(source) => source.open(path),
        None => StdioFileSource.open(path),
    };

    match result {
        Ok(handle) => {
            verbose_with(|| format!("Opened {}", path::filename(path)));
            Ok(handle)
        }
        Err(source) => {
            log::debug!("open failed for {path}: {source}");
            Err(HashError::FileOpen {
                path: path.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/filereader_tests.rs"]
mod tests;
