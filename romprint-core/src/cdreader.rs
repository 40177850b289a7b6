//! Pluggable CD image backend.
//!
//! Parsing `.cue`/`.chd`/`.gdi` containers, locating tracks, and peeling
//! sector framing is the backend's job; the library only asks for 2048-byte
//! user-data reads and absolute-to-track sector translation. There is no
//! default backend — CD recipes fail with an error naming the missing hook
//! when nothing is installed.

use std::sync::{Arc, RwLock};

use crate::error::HashError;

/// Selects which track of a CD image to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackSelector {
    /// A specific 1-based track number.
    Track(u32),
    /// The first data track on the disc.
    FirstData,
    /// The largest data track on the disc.
    Largest,
    /// The last track on the disc.
    Last,
}

/// An open track of a CD image. Dropped handles release their resources.
///
/// A single logical CD may be opened several times with different
/// selectors; each open yields an independent handle.
pub trait CdTrack {
    /// Read up to `buffer.len()` bytes of user data from a sector,
    /// returning the number of bytes read (0 on failure or end of track).
    fn read_sector(&mut self, sector: u32, buffer: &mut [u8]) -> usize;

    /// Translate a disc-wide (absolute) sector number to a sector number
    /// within this track, or `None` if the sector lies outside the track.
    ///
    /// Backends bridging a C ABI that encodes "not in this track" as a
    /// value with the high bit set should map that sentinel to `None` here.
    fn to_track_sector(&mut self, absolute: u32) -> Option<u32>;
}

/// Backend that opens tracks of CD images.
pub trait CdSource: Send + Sync {
    fn open_track(&self, path: &str, selector: TrackSelector) -> Option<Box<dyn CdTrack>>;
}

static CD_SOURCE: RwLock<Option<Arc<dyn CdSource>>> = RwLock::new(None);

/// Install a custom CD backend; `None` uninstalls it.
///
/// Not safe to call while hashing is in flight.
pub fn set_cd_source(source: Option<Arc<dyn CdSource>>) {
    *CD_SOURCE.write().unwrap_or_else(|e| e.into_inner()) = source;
}

/// Open a track through the installed backend.
pub fn open_track(path: &str, selector: TrackSelector) -> Result<Box<dyn CdTrack>, HashError> {
    let source = CD_SOURCE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone();

    let Some(source) = source else {
        return Err(HashError::MissingBackend("cdreader_open_track"));
    };

    source
        .open_track(path, selector)
        .ok_or(HashError::TrackOpen)
}
