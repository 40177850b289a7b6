//! MD5 digest helpers shared by every recipe.

use std::io::SeekFrom;

use romprint_core::{CdTrack, HashError, open_file, path, verbose_with};

/// Cap on the number of bytes any recipe feeds to MD5.
pub const MAX_BUFFER_SIZE: usize = 64 * 1024 * 1024;

/// Streaming chunk size for whole-file hashing.
const CHUNK_SIZE: usize = 64 * 1024;

/// Render a finished MD5 state as 32 lowercase hex digits.
pub(crate) fn finish_hex(md5: md5::Context) -> String {
    let hash = format!("{:x}", md5.compute());
    verbose_with(|| format!("Generated hash {hash}"));
    hash
}

/// MD5 over at most [`MAX_BUFFER_SIZE`] bytes of a buffer.
pub(crate) fn hash_buffer(buffer: &[u8]) -> String {
    let data = &buffer[..buffer.len().min(MAX_BUFFER_SIZE)];
    verbose_with(|| format!("Hashing {} byte buffer", data.len()));

    let mut md5 = md5::Context::new();
    md5.consume(data);
    finish_hex(md5)
}

/// MD5 over at most [`MAX_BUFFER_SIZE`] bytes of a file, streamed in
/// 64 KiB chunks.
pub(crate) fn hash_whole_file(path: &str) -> Result<String, HashError> {
    let mut file = open_file(path)?;
    let size = file.seek(SeekFrom::End(0))?;

    verbose_with(|| {
        if size > MAX_BUFFER_SIZE as u64 {
            format!(
                "Hashing first {MAX_BUFFER_SIZE} bytes (of {size} bytes) of {}",
                path::filename(path)
            )
        } else {
            format!("Hashing {} ({size} bytes)", path::filename(path))
        }
    });

    let mut remaining = size.min(MAX_BUFFER_SIZE as u64) as usize;
    file.seek(SeekFrom::Start(0))?;

    let mut md5 = md5::Context::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    while remaining > 0 {
        let want = remaining.min(CHUNK_SIZE);
        let n = file.read(&mut buffer[..want])?;
        if n == 0 {
            break;
        }
        md5.consume(&buffer[..n]);
        remaining -= n;
    }

    Ok(finish_hex(md5))
}

/// Read at most [`MAX_BUFFER_SIZE`] bytes of a file into memory, for
/// recipes that need to inspect a header before hashing.
pub(crate) fn read_buffered(path: &str) -> Result<Vec<u8>, HashError> {
    let mut file = open_file(path)?;
    let size = file.seek(SeekFrom::End(0))?;

    verbose_with(|| {
        if size > MAX_BUFFER_SIZE as u64 {
            format!(
                "Buffering first {MAX_BUFFER_SIZE} bytes (of {size} bytes) of {}",
                path::filename(path)
            )
        } else {
            format!("Buffering {} ({size} bytes)", path::filename(path))
        }
    });

    let size = size.min(MAX_BUFFER_SIZE as u64) as usize;
    file.seek(SeekFrom::Start(0))?;

    let mut buffer = vec![0u8; size];
    let n = read_fill(file.as_mut(), &mut buffer)?;
    buffer.truncate(n);
    Ok(buffer)
}

/// Read until the buffer is full or the source is exhausted.
pub(crate) fn read_fill(
    reader: &mut dyn romprint_core::ReadSeek,
    buffer: &mut [u8],
) -> Result<usize, HashError> {
    let mut filled = 0;
    while filled < buffer.len() {
        let n = reader.read(&mut buffer[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

/// Append the contents of an on-disc file to an MD5 state, reading whole
/// 2048-byte sectors and trimming the final one to the remaining size.
///
/// The first sector must read completely; after that, short reads end the
/// loop (the capped size has already bounded the work).
pub(crate) fn hash_cd_contents(
    md5: &mut md5::Context,
    track: &mut dyn CdTrack,
    mut sector: u32,
    size: u32,
    name: Option<&str>,
    description: &str,
) -> Result<(), HashError> {
    let mut buffer = [0u8; 2048];

    let mut num_read = track.read_sector(sector, &mut buffer);
    if num_read < buffer.len() {
        return Err(HashError::short_read(format!(
            "Could not read {description}"
        )));
    }

    let mut size = size.min(MAX_BUFFER_SIZE as u32);
    verbose_with(|| match name {
        Some(name) => format!(
            "Hashing {name} title ({} bytes) and contents ({size} bytes)",
            name.len()
        ),
        None => format!("Hashing {description} contents ({size} bytes)"),
    });

    loop {
        md5.consume(&buffer[..num_read]);

        size = size.saturating_sub(num_read as u32);
        if size == 0 {
            break;
        }

        sector += 1;
        let want = (size as usize).min(buffer.len());
        num_read = track.read_sector(sector, &mut buffer[..want]);
        if num_read == 0 {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tests/digest_tests.rs"]
mod tests;
