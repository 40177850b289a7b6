//! Arcade recipe.
//!
//! Arcade cores validate ROM set contents themselves and load sets by
//! archive name, so the fingerprint is the MD5 of the filename without
//! its extension — the archive is never opened.

use romprint_core::path;

use crate::digest::hash_buffer;

/// Console-subsystem folder names recognized by arcade frontends.
/// A parent folder from this list is part of the set's identity and is
/// prefixed to the hashed name. Comparison is case-sensitive.
const SUBSYSTEM_FOLDERS: &[&str] = &[
    "nes", "fds", "sms", "msx", "ngp", "pce", "sgx", "tg16", "coleco", "sg1000", "gamegear",
    "megadriv", "spectrum",
];

/// Hash the archive name, prefixed with `<folder>_` when the parent
/// folder names a recognized console subsystem.
pub(crate) fn arcade(full_path: &str) -> String {
    let filename = path::filename(full_path);
    let stem = match filename.rfind('.') {
        Some(dot) => &filename[..dot],
        None => filename,
    };

    if let Some(folder) = parent_folder(full_path, filename)
        && SUBSYSTEM_FOLDERS.contains(&folder)
    {
        return hash_buffer(format!("{folder}_{stem}").as_bytes());
    }

    hash_buffer(stem.as_bytes())
}

/// The name of the directory containing the filename, if any.
fn parent_folder<'a>(full_path: &'a str, filename: &str) -> Option<&'a str> {
    let filename_start = full_path.len() - filename.len();
    if filename_start < 2 {
        return None;
    }

    // skip the separator before the filename, then take the component
    let parent = &full_path[..filename_start - 1];
    match parent.rfind(['/', '\\']) {
        Some(pos) => Some(&parent[pos + 1..]),
        None => Some(parent),
    }
}

#[cfg(test)]
#[path = "tests/arcade_tests.rs"]
mod tests;
