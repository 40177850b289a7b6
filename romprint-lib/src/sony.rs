//! PlayStation and PlayStation 2 recipes.
//!
//! Both consoles boot through a `SYSTEM.CNF` text file at the ISO 9660
//! root that names the primary executable. A few games share a single
//! engine and differ only in data files, but their serial-numbered boot
//! paths are unique, so the boot filename is hashed along with the
//! executable contents.

use romprint_core::{CdTrack, HashError, TrackSelector, open_track, verbose_with};

use crate::digest::{finish_hex, hash_cd_contents};
use crate::iso9660::{DiscFile, find_file_sector};

/// Parse `SYSTEM.CNF` for the boot key and resolve the executable it
/// names. Returns the cleaned executable path and its extent.
fn find_boot_executable(
    track: &mut dyn CdTrack,
    boot_key: &str,
    cdrom_prefix: &str,
) -> Option<(String, DiscFile)> {
    let cnf = find_file_sector(track, "SYSTEM.CNF")?;

    let mut buffer = [0u8; 2048];
    let num_read = track.read_sector(cnf.sector, &mut buffer[..2047]);
    let content = String::from_utf8_lossy(&buffer[..num_read]).into_owned();

    for line in content.lines() {
        let Some(rest) = line.strip_prefix(boot_key) else {
            continue;
        };

        let rest = rest.trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };

        let mut value = rest.trim_start();
        if let Some(stripped) = value.strip_prefix(cdrom_prefix) {
            value = stripped;
        }
        if let Some(stripped) = value.strip_prefix('\\') {
            value = stripped;
        }

        let end = value
            .find(|c: char| c.is_ascii_whitespace() || c == ';')
            .unwrap_or(value.len());
        let exe_name = &value[..end];

        verbose_with(|| format!("Looking for boot executable: {exe_name}"));

        let found = find_file_sector(track, exe_name)?;
        return Some((exe_name.to_string(), found));
    }

    None
}

/// PlayStation. Discs without a `BOOT` key fall back to a bare
/// `PSX.EXE` at the root.
pub(crate) fn playstation(path: &str) -> Result<String, HashError> {
    let mut track = open_track(path, TrackSelector::Track(1))?;

    let (exe_name, mut found) = match find_boot_executable(track.as_mut(), "BOOT", "cdrom:") {
        Some(result) => result,
        None => {
            let found = find_file_sector(track.as_mut(), "PSX.EXE")
                .ok_or_else(|| HashError::not_found("Could not locate primary executable"))?;
            ("PSX.EXE".to_string(), found)
        }
    };

    let mut buffer = [0u8; 32];
    if track.read_sector(found.sector, &mut buffer) < buffer.len() {
        return Err(HashError::short_read("Could not read primary executable"));
    }

    if buffer.starts_with(b"PS-X EXE") {
        // the header states the executable size without counting itself;
        // the hash includes the header, so add one sector back
        let exe_size = u32::from_le_bytes([buffer[28], buffer[29], buffer[30], buffer[31]]);
        found.size = exe_size + 2048;
    } else {
        verbose_with(|| format!("{exe_name} did not contain PS-X EXE marker"));
    }

    let mut md5 = md5::Context::new();
    md5.consume(exe_name.as_bytes());

    hash_cd_contents(
        &mut md5,
        track.as_mut(),
        found.sector,
        found.size,
        Some(&exe_name),
        "primary executable",
    )?;

    Ok(finish_hex(md5))
}

/// PlayStation 2. Same shape as PlayStation with a `BOOT2` key, a
/// `cdrom0:` prefix, and the ISO-declared size (the ELF header isn't
/// trusted for sizing).
pub(crate) fn playstation2(path: &str) -> Result<String, HashError> {
    let mut track = open_track(path, TrackSelector::Track(1))?;

    let (exe_name, found) = find_boot_executable(track.as_mut(), "BOOT2", "cdrom0:")
        .ok_or_else(|| HashError::not_found("Could not locate primary executable"))?;

    let mut buffer = [0u8; 4];
    if track.read_sector(found.sector, &mut buffer) < buffer.len() {
        return Err(HashError::short_read("Could not read primary executable"));
    }

    if buffer != *b"\x7fELF" {
        verbose_with(|| format!("{exe_name} did not contain ELF marker"));
    }

    let mut md5 = md5::Context::new();
    md5.consume(exe_name.as_bytes());

    hash_cd_contents(
        &mut md5,
        track.as_mut(),
        found.sector,
        found.size,
        Some(&exe_name),
        "primary executable",
    )?;

    Ok(finish_hex(md5))
}

#[cfg(test)]
#[path = "tests/sony_tests.rs"]
mod tests;
