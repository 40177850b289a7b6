//! Shared vocabulary for the romprint workspace.
//!
//! This crate holds everything the hash recipes and their callers agree on:
//! the [`Console`] identifiers, the [`HashError`] taxonomy, path string
//! utilities, the pluggable file and CD backends with their process-wide
//! install hooks, and the error/verbose message sinks.
//!
//! Backend and sink installation is process-wide configuration: install
//! everything before hashing begins and keep it stable for the duration.

pub mod cdreader;
pub mod console;
pub mod error;
pub mod filereader;
pub mod messages;
pub mod path;

pub use cdreader::{CdSource, CdTrack, TrackSelector, open_track, set_cd_source};
pub use console::{ALL_CONSOLES, Console, ConsoleParseError};
pub use error::HashError;
pub use filereader::{FileSource, ReadSeek, open_file, set_file_source};
pub use messages::{
    MessageCallback, emit_error, set_error_handler, set_verbose_handler, verbose, verbose_with,
};
