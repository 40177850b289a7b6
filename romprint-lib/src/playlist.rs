//! `.m3u` playlist resolution.
//!
//! Multi-disc games ship as playlists of disc paths. Only the first entry
//! matters for identification: it names the disc whose hash the frontend
//! looks up.

use romprint_core::{HashError, open_file, path, verbose_with};

/// Maximum number of playlist bytes examined. The first entry always fits.
const PLAYLIST_SCAN_LIMIT: usize = 1023;

/// Extract the first disc path from a playlist, resolving relative entries
/// against the playlist's own directory.
pub(crate) fn first_item(playlist_path: &str) -> Result<String, HashError> {
    let mut file = open_file(playlist_path)?;

    let mut buffer = [0u8; PLAYLIST_SCAN_LIMIT];
    let num_read = crate::digest::read_fill(file.as_mut(), &mut buffer)?;
    let content = String::from_utf8_lossy(&buffer[..num_read]);

    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        verbose_with(|| format!("Extracted {line} from playlist"));

        if path::is_absolute(line) {
            return Ok(line.to_string());
        }

        // relative entry: prepend the playlist's directory
        let directory_len = playlist_path.len() - path::filename(playlist_path).len();
        let mut resolved = String::with_capacity(directory_len + line.len());
        resolved.push_str(&playlist_path[..directory_len]);
        resolved.push_str(line);
        return Ok(resolved);
    }

    Err(HashError::not_found(
        "Failed to get first item from playlist",
    ))
}

#[cfg(test)]
#[path = "tests/playlist_tests.rs"]
mod tests;
