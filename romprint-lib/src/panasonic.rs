//! 3DO recipe.
//!
//! 3DO discs carry the Opera filesystem rather than ISO 9660. The volume
//! header lives in the first 132 bytes of sector 0; directories are
//! chains of blocks whose entries use 24-bit big-endian fields. The
//! fingerprint covers the volume header and the `LaunchMe` boot
//! executable's contents.

use romprint_core::{HashError, TrackSelector, open_track, verbose_with};

use crate::digest::finish_hex;

/// Volume header identifier: record type 0x01, five sync bytes 0x5A,
/// version 0x01.
const OPERA_IDENTIFIER: [u8; 7] = [0x01, 0x5A, 0x5A, 0x5A, 0x5A, 0x5A, 0x01];

/// Name of the 3DO boot executable.
const BOOT_NAME: &[u8] = b"LaunchMe";

struct LaunchMe {
    /// Byte offset of the executable's first block.
    location: u32,
    /// Executable size in bytes.
    size: u32,
}

/// 3DO. Hashes the 132-byte Opera volume header and the contents of
/// `LaunchMe`.
pub(crate) fn threedo(path: &str) -> Result<String, HashError> {
    let mut track = open_track(path, TrackSelector::Track(1))?;

    let mut buffer = [0u8; 2048];
    track.read_sector(0, &mut buffer[..132]);

    if buffer[..7] != OPERA_IDENTIFIER {
        return Err(HashError::format_mismatch("Not a 3DO CD"));
    }

    verbose_with(|| {
        format!(
            "Found 3DO CD, title={}",
            String::from_utf8_lossy(&buffer[0x28..0x48])
        )
    });

    // the volume header is part of the fingerprint
    let mut md5 = md5::Context::new();
    md5.consume(&buffer[..132]);

    // block size at 0x4C and root directory block index at 0x64, both
    // 24-bit BE with a leading zero byte
    let block_size = read_u24_be(&buffer, 0x4D);
    let root_offset = read_u24_be(&buffer, 0x65) * block_size;

    let mut sector = root_offset / 2048;
    let mut launch_me: Option<LaunchMe> = None;

    loop {
        track.read_sector(sector, &mut buffer);

        // entries start at the offset stored at 0x12 and end at the one
        // stored at 0x0D
        let mut offset = (buffer[0x12] as usize) << 8 | buffer[0x13] as usize;
        let stop = read_u24_be(&buffer, 0x0D) as usize;

        while offset < stop {
            // entry type 0x02 is a plain file
            if buffer[offset + 0x03] == 0x02 && entry_name_matches(&buffer, offset, BOOT_NAME) {
                let entry_block_size = read_u24_be(&buffer, offset + 0x0D);
                let location = read_u24_be(&buffer, offset + 0x45) * entry_block_size;
                let size = read_u24_be(&buffer, offset + 0x11);

                verbose_with(|| {
                    format!(
                        "Hashing header (132 bytes) and {} ({size} bytes)",
                        String::from_utf8_lossy(BOOT_NAME)
                    )
                });

                if size != 0 {
                    launch_me = Some(LaunchMe { location, size });
                }
                break;
            }

            // each entry is 0x48 bytes plus one word per extra copy
            offset += 0x48 + buffer[offset + 0x43] as usize * 4;
        }

        if launch_me.is_some() {
            break;
        }

        // directory listing may continue in another block
        let next = (buffer[2] as u32) << 8 | buffer[3] as u32;
        if next == 0xFFFF {
            break;
        }

        sector = (root_offset + next * block_size) / 2048;
    }

    let Some(launch_me) = launch_me else {
        return Err(HashError::not_found("Could not find LaunchMe"));
    };

    let mut sector = launch_me.location / 2048;
    let mut size = launch_me.size;

    while size > 2048 {
        track.read_sector(sector, &mut buffer);
        md5.consume(&buffer);

        sector += 1;
        size -= 2048;
    }

    track.read_sector(sector, &mut buffer[..size as usize]);
    md5.consume(&buffer[..size as usize]);

    Ok(finish_hex(md5))
}

/// Compare the NUL-terminated, 32-byte entry name at `offset + 0x20`
/// case-insensitively.
fn entry_name_matches(buffer: &[u8], offset: usize, name: &[u8]) -> bool {
    let field = &buffer[offset + 0x20..offset + 0x40];
    let len = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    field[..len].eq_ignore_ascii_case(name)
}

fn read_u24_be(buffer: &[u8], offset: usize) -> u32 {
    (buffer[offset] as u32) << 16 | (buffer[offset + 1] as u32) << 8 | buffer[offset + 2] as u32
}

#[cfg(test)]
#[path = "tests/panasonic_tests.rs"]
mod tests;
