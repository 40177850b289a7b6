//! Sega CD / Saturn and Dreamcast recipes.

use romprint_core::{HashError, TrackSelector, open_track, verbose, verbose_with};

use crate::digest::{finish_hex, hash_buffer, hash_cd_contents};
use crate::iso9660::find_file_sector;

/// Sega CD and Saturn share one recipe: the first 512 bytes of sector 0
/// are a volume header and ROM header that uniquely identify the game.
/// The boot chain behind them loads any number of executables, so the
/// headers are the whole fingerprint.
pub(crate) fn sega_cd(path: &str) -> Result<String, HashError> {
    let mut track = open_track(path, TrackSelector::Track(1))?;

    let mut buffer = [0u8; 512];
    track.read_sector(0, &mut buffer);
    drop(track);

    if &buffer[..16] != b"SEGADISCSYSTEM  " && &buffer[..16] != b"SEGA SEGASATURN " {
        return Err(HashError::format_mismatch("Not a Sega CD"));
    }

    Ok(hash_buffer(&buffer))
}

/// Dreamcast. Track 3 opens with the 256-byte IP.BIN metadata block,
/// which names the boot executable; the hash covers the block and the
/// executable's contents. The executable usually lives in the last
/// track, occasionally in track 3 itself.
pub(crate) fn dreamcast(path: &str) -> Result<String, HashError> {
    let mut track = open_track(path, TrackSelector::Track(3))?;

    let mut buffer = [0u8; 256];
    track.read_sector(0, &mut buffer);

    if &buffer[..16] != b"SEGA SEGAKATANA " {
        return Err(HashError::format_mismatch("Not a Dreamcast CD"));
    }

    let mut md5 = md5::Context::new();
    md5.consume(buffer.as_slice());

    verbose_with(|| {
        let title = String::from_utf8_lossy(&buffer[0x80..]);
        let device = String::from_utf8_lossy(&buffer[0x40..0x50]);
        format!(
            "Found Dreamcast CD: {} ({})",
            title.trim_end_matches(' '),
            device.trim_end_matches(' ')
        )
    });

    // boot filename at offset 96, space-padded, at most 16 bytes
    let name_len = buffer[96..112]
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(16);

    // a missing boot file means the disc can't run at all
    if name_len == 0 {
        return Err(HashError::format_mismatch(
            "Boot executable not specified on IP.BIN",
        ));
    }

    let exe_name = String::from_utf8_lossy(&buffer[96..96 + name_len]).into_owned();

    let boot = find_file_sector(track.as_mut(), &exe_name)
        .ok_or_else(|| HashError::not_found("Could not locate boot executable"))?;

    drop(track);

    let mut last_track = open_track(path, TrackSelector::Last)?;
    let track_sector = match last_track.to_track_sector(boot.sector) {
        Some(sector) => Some(sector),
        None => {
            // a handful of games keep the boot executable in the primary
            // data track instead; Q*bert was the first identified
            drop(last_track);
            verbose("Boot executable not found in last track, trying primary track");

            last_track = open_track(path, TrackSelector::Track(3))?;
            last_track.to_track_sector(boot.sector)
        }
    };

    let Some(track_sector) = track_sector else {
        return Err(HashError::short_read("Could not read boot executable"));
    };

    hash_cd_contents(
        &mut md5,
        last_track.as_mut(),
        track_sector,
        boot.size,
        None,
        "boot executable",
    )?;

    Ok(finish_hex(md5))
}

#[cfg(test)]
#[path = "tests/sega_tests.rs"]
mod tests;
