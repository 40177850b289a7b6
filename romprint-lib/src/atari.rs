//! Atari 7800 and Lynx recipes.
//!
//! Both systems circulate dumps with an optional emulator header that must
//! not land in the fingerprint.

use romprint_core::verbose;

use crate::digest::hash_buffer;

/// Atari 7800. Dumps may carry a 128-byte header with `"ATARI7800"`
/// at offset 1.
pub(crate) fn atari_7800(buffer: &[u8]) -> String {
    if buffer.len() >= 128 && &buffer[1..10] == b"ATARI7800" {
        verbose("Ignoring 7800 header");
        return hash_buffer(&buffer[128..]);
    }

    hash_buffer(buffer)
}

/// Atari Lynx. Dumps may carry a 64-byte header starting `LYNX\0`.
pub(crate) fn lynx(buffer: &[u8]) -> String {
    if buffer.len() >= 64 && buffer.starts_with(b"LYNX\0") {
        verbose("Ignoring LYNX header");
        return hash_buffer(&buffer[64..]);
    }

    hash_buffer(buffer)
}

#[cfg(test)]
#[path = "tests/atari_tests.rs"]
mod tests;
