use super::*;
use std::io::Write;

use crate::testutil::{md5_hex, memory_track};

#[test]
fn empty_buffer_hashes_to_md5_of_nothing() {
    assert_eq!(hash_buffer(&[]), "d41d8cd98f00b204e9800998ecf8427e");
}

#[test]
fn buffer_hash_is_plain_md5() {
    assert_eq!(hash_buffer(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn hash_is_32_lowercase_hex_digits() {
    let hash = hash_buffer(b"anything at all");
    assert_eq!(hash.len(), 32);
    assert!(
        hash.chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    );
}

#[test]
fn whole_file_agrees_with_buffer_hash() {
    let contents: Vec<u8> = (0..100_000u32).map(|i| (i % 251) as u8).collect();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&contents).unwrap();

    let from_file = hash_whole_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(from_file, hash_buffer(&contents));
}

#[test]
fn whole_file_hash_is_idempotent() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"same bytes every time").unwrap();

    let path = file.path().to_str().unwrap().to_string();
    assert_eq!(hash_whole_file(&path).unwrap(), hash_whole_file(&path).unwrap());
}

#[test]
fn read_buffered_returns_file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"buffered contents").unwrap();

    let buffer = read_buffered(file.path().to_str().unwrap()).unwrap();
    assert_eq!(buffer, b"buffered contents");
}

#[test]
fn missing_file_fails_to_hash() {
    assert!(hash_whole_file("/nonexistent/romprint/whole.bin").is_err());
}

#[test]
fn cd_contents_trims_final_sector() {
    // 3000 bytes: one full sector plus a 952-byte tail
    let contents: Vec<u8> = (0..3000u32).map(|i| (i % 255) as u8).collect();
    let mut data = contents.clone();
    data.resize(4096, 0);

    let mut track = memory_track(0, data);
    let mut md5 = md5::Context::new();
    hash_cd_contents(&mut md5, &mut track, 0, 3000, None, "test file").unwrap();

    assert_eq!(finish_hex(md5), md5_hex(&contents));
}

#[test]
fn cd_contents_requires_a_full_first_sector() {
    // track with less than one sector of data
    let mut track = memory_track(0, vec![0u8; 100]);
    let mut md5 = md5::Context::new();
    let result = hash_cd_contents(&mut md5, &mut track, 0, 3000, None, "test file");
    assert!(result.is_err());
}
