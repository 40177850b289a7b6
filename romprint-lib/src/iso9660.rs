//! ISO 9660 file lookup.
//!
//! Just enough of the filesystem to find a boot executable: read the root
//! directory extent out of the primary volume descriptor at sector 16, then
//! walk fixed-format directory records. Paths use `\` as the separator (the
//! in-disc convention) and match case-insensitively. Directories spanning
//! more than one sector are not walked — boot files sort early enough that
//! the first sector has always sufficed.

use romprint_core::{CdTrack, verbose_with};

/// Location and size of a file found on a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DiscFile {
    /// Absolute sector at which the file's content begins.
    pub sector: u32,
    /// File length in bytes.
    pub size: u32,
}

/// Resolve a backslash-separated path to the file's extent, or `None` on
/// lookup miss or I/O failure.
pub(crate) fn find_file_sector(track: &mut dyn CdTrack, path: &str) -> Option<DiscFile> {
    let (directory_sector, name) = match path.rfind('\\') {
        Some(split) => {
            // resolve the containing directory first
            let directory = find_file_sector(track, &path[..split])?;
            (directory.sector, &path[split + 1..])
        }
        None => {
            // root directory extent: 24-bit LE, 2 bytes into the root
            // directory record at offset 156 of the volume descriptor
            let mut buffer = [0u8; 256];
            if track.read_sector(16, &mut buffer) == 0 {
                return None;
            }
            (read_u24_le(&buffer, 156 + 2), path)
        }
    };

    let directory_sector = track.to_track_sector(directory_sector)?;
    search_directory(track, directory_sector, name)
}

/// Walk the directory records of a single 2048-byte directory sector.
fn search_directory(track: &mut dyn CdTrack, sector: u32, name: &str) -> Option<DiscFile> {
    let mut buffer = [0u8; 2048];
    if track.read_sector(sector, &mut buffer) == 0 {
        return None;
    }

    let name_len = name.len();
    let mut offset = 0usize;
    while offset < buffer.len() {
        // the first byte of a record is its length; 0 ends the listing
        let record_len = buffer[offset] as usize;
        if record_len == 0 {
            return None;
        }

        // the identifier starts 33 bytes in, stored as "FILENAME;version"
        // for files and as the bare name for directories
        if offset + 33 + name_len < buffer.len() {
            let candidate = &buffer[offset + 33..offset + 33 + name_len];
            let terminator = buffer[offset + 33 + name_len];
            if (terminator == b';' || terminator == 0)
                && candidate.eq_ignore_ascii_case(name.as_bytes())
            {
                let found = DiscFile {
                    sector: read_u24_le(&buffer, offset + 2),
                    size: read_u32_le(&buffer, offset + 10),
                };
                verbose_with(|| format!("Found {name} at sector {}", found.sector));
                return Some(found);
            }
        }

        offset += record_len;
    }

    None
}

fn read_u24_le(buffer: &[u8], offset: usize) -> u32 {
    buffer[offset] as u32 | (buffer[offset + 1] as u32) << 8 | (buffer[offset + 2] as u32) << 16
}

fn read_u32_le(buffer: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buffer[offset],
        buffer[offset + 1],
        buffer[offset + 2],
        buffer[offset + 3],
    ])
}

#[cfg(test)]
#[path = "tests/iso9660_tests.rs"]
mod tests;
