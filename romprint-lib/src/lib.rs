//! Canonical MD5 fingerprints for ROM dumps, disc images, and playlists.
//!
//! Every supported console has a hashing recipe that digests exactly the
//! bytes that identify a game: some hash the raw file, some skip known
//! copier headers, some walk a disc filesystem to find the boot executable
//! and hash metadata plus executable contents, and arcade sets hash only
//! the archive name.
//!
//! The two direct entry points are [`generate_from_buffer`] and
//! [`generate_from_file`]; when the console isn't known up front,
//! [`HashIterator`] infers a prioritized candidate list from the path and
//! tries recipes in order.
//!
//! File access and CD track access go through pluggable backends installed
//! once at startup (see [`set_file_source`] and [`set_cd_source`]); disc
//! recipes fail cleanly when no CD backend is present. Archives are never
//! decompressed.
//!
//! ```no_run
//! use romprint_lib::{Console, generate_from_file};
//!
//! let hash = generate_from_file(Console::Nes, "roms/smb.nes")?;
//! assert_eq!(hash.len(), 32);
//! # Ok::<(), romprint_lib::HashError>(())
//! ```

mod arcade;
mod atari;
mod digest;
mod generate;
mod iso9660;
mod iterator;
mod nec;
mod nintendo;
mod panasonic;
mod playlist;
mod sega;
mod sony;

pub use digest::MAX_BUFFER_SIZE;
pub use generate::{generate_from_buffer, generate_from_file};
pub use iterator::HashIterator;

// Re-export the shared vocabulary so callers need only one crate.
pub use romprint_core::{
    ALL_CONSOLES, CdSource, CdTrack, Console, ConsoleParseError, FileSource, HashError,
    MessageCallback, ReadSeek, TrackSelector, set_cd_source, set_error_handler, set_file_source,
    set_verbose_handler,
};

#[cfg(test)]
#[path = "tests/testutil.rs"]
pub(crate) mod testutil;
