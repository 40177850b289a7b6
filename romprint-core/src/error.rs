use thiserror::Error;

/// Errors that can occur while generating a hash.
#[derive(Debug, Error)]
pub enum HashError {
    /// I/O error from the file backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file backend could not open the path
    #[error("Could not open {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CD backend could not open the requested track
    #[error("Could not open track")]
    TrackOpen,

    /// The console cannot be hashed through the requested entry point
    #[error("Unsupported console for {operation} hash: {console}")]
    UnsupportedConsole {
        console: &'static str,
        operation: &'static str,
    },

    /// A critical read returned fewer bytes than required
    #[error("{0}")]
    ShortRead(String),

    /// Expected magic/signature not present
    #[error("{0}")]
    FormatMismatch(String),

    /// Declared sizes exceed plausible bounds
    #[error("{0}")]
    SanityCheck(String),

    /// A required on-disc file could not be located
    #[error("{0}")]
    NotFound(String),

    /// CD operation invoked without a CD backend installed
    #[error("no hook registered for {0}")]
    MissingBackend(&'static str),
}

impl HashError {
    pub fn short_read(msg: impl Into<String>) -> Self {
        Self::ShortRead(msg.into())
    }

    pub fn format_mismatch(msg: impl Into<String>) -> Self {
        Self::FormatMismatch(msg.into())
    }

    pub fn sanity_check(msg: impl Into<String>) -> Self {
        Self::SanityCheck(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
