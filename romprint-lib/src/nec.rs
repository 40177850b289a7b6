//! PC Engine and PC-FX recipes.

use romprint_core::{CdTrack, HashError, TrackSelector, open_track, verbose, verbose_with};

use crate::digest::{MAX_BUFFER_SIZE, finish_hex, hash_buffer};
use crate::iso9660::find_file_sector;

/// Boot-block marker 32 bytes into sector 1 of a PC Engine CD.
const PCE_SIGNATURE: &[u8] = b"PC Engine CD-ROM SYSTEM";

/// Header marker at the start of sector 0 of a PC-FX CD.
const PCFX_SIGNATURE: &[u8] = b"PC-FX:Hu_CD-ROM";

/// PC Engine HuCard. ROM data comes in 128 KB multiples; a size 512
/// bytes past that means a dump header is present. The heuristic must
/// stay verbatim — it is part of the hash identity.
pub(crate) fn pce(buffer: &[u8]) -> String {
    if buffer.len() % 0x20000 == 512 {
        verbose("Ignoring PCE header");
        return hash_buffer(&buffer[512..]);
    }

    hash_buffer(buffer)
}

/// PC Engine CD: the first data track carries the boot block.
pub(crate) fn pce_cd(path: &str) -> Result<String, HashError> {
    let mut track = open_track(path, TrackSelector::FirstData)?;
    pce_track(track.as_mut())
}

/// Hash a PC Engine CD given its data track.
///
/// Sector 1 holds the boot block: program start sector, sector count, and
/// the 22-byte title that seeds the hash. GameExpress discs lack the boot
/// block and use a plain ISO filesystem instead — those hash `BOOT.BIN`.
pub(crate) fn pce_track(track: &mut dyn CdTrack) -> Result<String, HashError> {
    let mut buffer = [0u8; 2048];
    if track.read_sector(1, &mut buffer[..128]) < 128 {
        return Err(HashError::format_mismatch("Not a PC Engine CD"));
    }

    if &buffer[32..55] == PCE_SIGNATURE {
        verbose_with(|| {
            format!(
                "Found PC Engine CD, title={}",
                String::from_utf8_lossy(&buffer[106..128])
            )
        });

        // the title is the last 22 bytes of the boot block
        let mut md5 = md5::Context::new();
        md5.consume(&buffer[106..128]);

        // program start sector (24-bit BE) and sector count
        let mut sector = (buffer[0] as u32) << 16 | (buffer[1] as u32) << 8 | buffer[2] as u32;
        let mut num_sectors = buffer[3] as u32;

        verbose_with(|| format!("Hashing {num_sectors} sectors starting at sector {sector}"));

        while num_sectors > 0 {
            track.read_sector(sector, &mut buffer);
            md5.consume(&buffer);

            sector += 1;
            num_sectors -= 1;
        }

        return Ok(finish_hex(md5));
    }

    if let Some(boot) = find_file_sector(track, "BOOT.BIN")
        && (boot.size as usize) < MAX_BUFFER_SIZE
    {
        let mut md5 = md5::Context::new();
        let mut sector = boot.sector;
        let mut size = boot.size;

        while size > buffer.len() as u32 {
            track.read_sector(sector, &mut buffer);
            md5.consume(&buffer);

            sector += 1;
            size -= buffer.len() as u32;
        }

        if size > 0 {
            track.read_sector(sector, &mut buffer[..size as usize]);
            md5.consume(&buffer[..size as usize]);
        }

        return Ok(finish_hex(md5));
    }

    Err(HashError::format_mismatch("Not a PC Engine CD"))
}

/// PC-FX CD. The boot header fills the first two sectors of whichever
/// track carries the executable — usually the largest data track, with
/// track 2 as the fallback. Some PC-FX discs identify as PC Engine CDs
/// and hash through that recipe instead.
pub(crate) fn pcfx_cd(path: &str) -> Result<String, HashError> {
    let mut track = open_track(path, TrackSelector::Largest)?;

    let mut buffer = [0u8; 2048];
    track.read_sector(0, &mut buffer[..32]);

    if &buffer[..15] != PCFX_SIGNATURE {
        drop(track);
        track = open_track(path, TrackSelector::Track(2))?;
        track.read_sector(0, &mut buffer[..32]);
    }

    if &buffer[..15] != PCFX_SIGNATURE {
        track.read_sector(1, &mut buffer[..128]);
        if &buffer[32..55] == PCE_SIGNATURE
            && let Ok(hash) = pce_track(track.as_mut())
        {
            return Ok(hash);
        }

        return Err(HashError::format_mismatch("Not a PC-FX CD"));
    }

    // the important part of the boot header is the first 128 bytes of the
    // second sector; the title is the first 32 of those
    track.read_sector(1, &mut buffer[..128]);

    verbose_with(|| {
        format!(
            "Found PC-FX CD, title={}",
            String::from_utf8_lossy(&buffer[..32])
        )
    });

    let mut md5 = md5::Context::new();
    md5.consume(&buffer[..128]);

    // program start sector and sector count, both 24-bit LE
    let mut sector = buffer[32] as u32 | (buffer[33] as u32) << 8 | (buffer[34] as u32) << 16;
    let mut num_sectors = buffer[36] as u32 | (buffer[37] as u32) << 8 | (buffer[38] as u32) << 16;

    verbose_with(|| format!("Hashing {num_sectors} sectors starting at sector {sector}"));

    while num_sectors > 0 {
        track.read_sector(sector, &mut buffer);
        md5.consume(&buffer);

        sector += 1;
        num_sectors -= 1;
    }

    Ok(finish_hex(md5))
}

#[cfg(test)]
#[path = "tests/nec_tests.rs"]
mod tests;
