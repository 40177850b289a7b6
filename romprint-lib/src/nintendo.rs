//! NES, SNES, and Nintendo DS recipes.

use std::io::SeekFrom;

use romprint_core::{HashError, open_file, verbose, verbose_with};

use crate::digest::{finish_hex, hash_buffer, read_fill};

/// Size of the icon/title banner block included in the DS fingerprint.
const DS_ICON_SIZE: usize = 0xA00;

/// Sanity bound on the combined ARM9+ARM7 code size of a DS ROM.
/// Real code blocks are typically under 1 MB each.
const DS_MAX_CODE_SIZE: u64 = 16 * 1024 * 1024;

/// NES / Famicom Disk System. Strips a 16-byte iNES (`NES\x1A`) or
/// FDS-wrapper (`FDS\x1A`) header when present.
pub(crate) fn nes(buffer: &[u8]) -> String {
    if buffer.len() >= 16 && buffer.starts_with(b"NES\x1a") {
        verbose("Ignoring NES header");
        return hash_buffer(&buffer[16..]);
    }

    if buffer.len() >= 16 && buffer.starts_with(b"FDS\x1a") {
        verbose("Ignoring FDS header");
        return hash_buffer(&buffer[16..]);
    }

    hash_buffer(buffer)
}

/// SNES. Copier headers are 512 bytes with no magic; one is assumed
/// present exactly when the size is 512 bytes past a multiple of 8 KB.
/// The heuristic must stay verbatim — it is part of the hash identity.
pub(crate) fn snes(buffer: &[u8]) -> String {
    if buffer.len() % 0x2000 == 512 {
        verbose("Ignoring SNES header");
        return hash_buffer(&buffer[512..]);
    }

    hash_buffer(buffer)
}

/// Nintendo DS. The fingerprint covers the first 0x160 bytes of the
/// cartridge header, the ARM9 and ARM7 code blocks, and the 0xA00-byte
/// icon/title block.
pub(crate) fn nintendo_ds(path: &str) -> Result<String, HashError> {
    let mut file = open_file(path)?;

    let mut header = [0u8; 512];
    file.seek(SeekFrom::Start(0))?;
    if read_fill(file.as_mut(), &mut header)? != header.len() {
        return Err(HashError::short_read("Failed to read header"));
    }

    // SuperCard flash carts wrap the ROM in an extra 512-byte header
    let mut offset = 0u64;
    if header[0..4] == [0x2E, 0x00, 0x00, 0xEA] && header[0xB0..0xB4] == [0x44, 0x46, 0x96, 0x00] {
        verbose("Ignoring SuperCard header");

        offset = 512;
        file.seek(SeekFrom::Start(offset))?;
        if read_fill(file.as_mut(), &mut header)? != header.len() {
            return Err(HashError::short_read("Failed to read header"));
        }
    }

    let arm9_addr = read_u32_le(&header, 0x20);
    let arm9_size = read_u32_le(&header, 0x2C);
    let arm7_addr = read_u32_le(&header, 0x30);
    let arm7_size = read_u32_le(&header, 0x3C);
    let icon_addr = read_u32_le(&header, 0x68);

    if arm9_size as u64 + arm7_size as u64 > DS_MAX_CODE_SIZE {
        return Err(HashError::sanity_check(format!(
            "arm9 code size ({arm9_size}) + arm7 code size ({arm7_size}) exceeds 16MB"
        )));
    }

    let mut md5 = md5::Context::new();

    verbose("Hashing 352 byte header");
    md5.consume(&header[..0x160]);

    let buffer_size = (arm9_size.max(arm7_size) as usize).max(DS_ICON_SIZE);
    let mut buffer = vec![0u8; buffer_size];

    // short code-block reads hash as zeroes, keeping the result deterministic
    verbose_with(|| format!("Hashing {arm9_size} byte arm9 code (at {arm9_addr:08X})"));
    file.seek(SeekFrom::Start(arm9_addr as u64 + offset))?;
    buffer[..arm9_size as usize].fill(0);
    read_fill(file.as_mut(), &mut buffer[..arm9_size as usize])?;
    md5.consume(&buffer[..arm9_size as usize]);

    verbose_with(|| format!("Hashing {arm7_size} byte arm7 code (at {arm7_addr:08X})"));
    file.seek(SeekFrom::Start(arm7_addr as u64 + offset))?;
    buffer[..arm7_size as usize].fill(0);
    read_fill(file.as_mut(), &mut buffer[..arm7_size as usize])?;
    md5.consume(&buffer[..arm7_size as usize]);

    verbose_with(|| format!("Hashing 2560 byte icon and labels data (at {icon_addr:08X})"));
    file.seek(SeekFrom::Start(icon_addr as u64 + offset))?;
    buffer[..DS_ICON_SIZE].fill(0);
    let num_read = read_fill(file.as_mut(), &mut buffer[..DS_ICON_SIZE])?;
    if num_read < DS_ICON_SIZE {
        // some homebrew ROMs end before a full icon block; pad with zeroes
        verbose_with(|| {
            format!(
                "Warning: only got {num_read} bytes for icon and labels data, 0-padding to 2560 bytes"
            )
        });
    }
    md5.consume(&buffer[..DS_ICON_SIZE]);

    Ok(finish_hex(md5))
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
#[path = "tests/nintendo_tests.rs"]
mod tests;
