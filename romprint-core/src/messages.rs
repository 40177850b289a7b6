//! Error and verbose message sinks.
//!
//! Frontends install callbacks to receive single-line diagnostics; the
//! library never retains the strings it emits. Both sinks are optional —
//! with nothing installed, messages are dropped. Installation is process
//! wide and is not safe to change while hashing is in flight.

use std::sync::{Arc, RwLock};

/// Callback receiving a single-line diagnostic message.
pub type MessageCallback = Arc<dyn Fn(&str) + Send + Sync>;

static ERROR_SINK: RwLock<Option<MessageCallback>> = RwLock::new(None);
static VERBOSE_SINK: RwLock<Option<MessageCallback>> = RwLock::new(None);

/// Install (or with `None`, remove) the error message sink.
pub fn set_error_handler(callback: Option<MessageCallback>) {
    *ERROR_SINK.write().unwrap_or_else(|e| e.into_inner()) = callback;
}

/// Install (or with `None`, remove) the verbose message sink.
pub fn set_verbose_handler(callback: Option<MessageCallback>) {
    *VERBOSE_SINK.write().unwrap_or_else(|e| e.into_inner()) = callback;
}

/// Emit a message to the error sink, if one is installed.
pub fn emit_error(message: &str) {
    if let Some(sink) = ERROR_SINK.read().unwrap_or_else(|e| e.into_inner()).as_ref() {
        sink(message);
    }
}

/// Emit a message to the verbose sink, if one is installed.
pub fn verbose(message: &str) {
    if let Some(sink) = VERBOSE_SINK.read().unwrap_or_else(|e| e.into_inner()).as_ref() {
        sink(message);
    }
}

/// Emit a lazily-formatted message to the verbose sink.
///
/// The closure only runs when a sink is installed, so callers can format
/// freely without paying for it on the silent path.
pub fn verbose_with<F: FnOnce() -> String>(message: F) {
    if let Some(sink) = VERBOSE_SINK.read().unwrap_or_else(|e| e.into_inner()).as_ref() {
        sink(&message());
    }
}
