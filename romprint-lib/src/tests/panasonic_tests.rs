use super::*;
use crate::testutil::{MockDisc, md5_hex, register_disc};

fn write_u24_be(buffer: &mut [u8], offset: usize, value: u32) {
    buffer[offset] = (value >> 16) as u8;
    buffer[offset + 1] = (value >> 8) as u8;
    buffer[offset + 2] = value as u8;
}

/// Opera volume header in sector 0 with a 2048-byte block size and the
/// root directory at block `root_block`.
fn make_volume_header(data: &mut [u8], root_block: u32) {
    data[0] = 0x01;
    data[1..6].fill(0x5A);
    data[6] = 0x01;
    data[0x28..0x38].copy_from_slice(b"ROMPRINT 3DO    ");
    write_u24_be(data, 0x4D, 2048);
    write_u24_be(data, 0x65, root_block);
}

/// Write one directory entry and return the offset just past it.
fn write_entry(data: &mut [u8], offset: usize, name: &[u8], block: u32, size: u32) -> usize {
    data[offset + 0x03] = 0x02; // file
    write_u24_be(data, offset + 0x0D, 2048); // entry block size
    write_u24_be(data, offset + 0x11, size);
    data[offset + 0x20..offset + 0x20 + name.len()].copy_from_slice(name);
    write_u24_be(data, offset + 0x45, block);
    data[offset + 0x43] = 0; // no extra copies
    offset + 0x48
}

/// Mark a directory sector's entry bounds: entries start at `first`,
/// stop at `stop`.
fn set_entry_bounds(sector: &mut [u8], first: u16, stop: u32) {
    sector[0x12] = (first >> 8) as u8;
    sector[0x13] = first as u8;
    write_u24_be(sector, 0x0D, stop);
}

#[test]
fn threedo_hashes_volume_header_and_launchme() {
    let launchme: Vec<u8> = (0..3000u32).map(|i| (i % 197) as u8).collect();

    let mut data = vec![0u8; 4 * 2048];
    make_volume_header(&mut data, 1);

    // root directory at block 1 (sector 1) with a single entry
    let dir = 2048;
    let end = write_entry(&mut data[dir..], 0x14, b"LaunchMe\0", 2, 3000) as u32;
    set_entry_bounds(&mut data[dir..dir + 2048], 0x14, end);
    data[dir + 2] = 0xFF;
    data[dir + 3] = 0xFF;

    // LaunchMe content at block 2 (sector 2)
    data[2 * 2048..2 * 2048 + 3000].copy_from_slice(&launchme);

    let mut expected = data[..132].to_vec();
    expected.extend_from_slice(&launchme);

    register_disc("mock://3do.cue", MockDisc::single_track(data));
    assert_eq!(threedo("mock://3do.cue").unwrap(), md5_hex(&expected));
}

#[test]
fn threedo_follows_the_directory_chain() {
    let launchme: Vec<u8> = (0..2100u32).map(|i| (i % 193) as u8).collect();

    let mut data = vec![0u8; 6 * 2048];
    make_volume_header(&mut data, 1);

    // first directory sector: one unrelated entry, continuation at
    // block offset 2 (root offset 2048 + 2 * 2048 = sector 3)
    let dir = 2048;
    let end = write_entry(&mut data[dir..], 0x14, b"Unrelated\0", 4, 100) as u32;
    set_entry_bounds(&mut data[dir..dir + 2048], 0x14, end);
    data[dir + 2] = 0x00;
    data[dir + 3] = 0x02;

    // continuation sector holds LaunchMe at block 4 (sector 4)
    let cont = 3 * 2048;
    let end = write_entry(&mut data[cont..], 0x14, b"LaunchMe\0", 4, 2100) as u32;
    set_entry_bounds(&mut data[cont..cont + 2048], 0x14, end);
    data[cont + 2] = 0xFF;
    data[cont + 3] = 0xFF;

    data[4 * 2048..4 * 2048 + 2100].copy_from_slice(&launchme);

    let mut expected = data[..132].to_vec();
    expected.extend_from_slice(&launchme);

    register_disc("mock://3do-chain.cue", MockDisc::single_track(data));
    assert_eq!(threedo("mock://3do-chain.cue").unwrap(), md5_hex(&expected));
}

#[test]
fn threedo_without_launchme_is_an_error() {
    let mut data = vec![0u8; 3 * 2048];
    make_volume_header(&mut data, 1);

    let dir = 2048;
    let end = write_entry(&mut data[dir..], 0x14, b"Other\0", 2, 100) as u32;
    set_entry_bounds(&mut data[dir..dir + 2048], 0x14, end);
    data[dir + 2] = 0xFF;
    data[dir + 3] = 0xFF;

    register_disc("mock://3do-nolaunch.cue", MockDisc::single_track(data));

    let result = threedo("mock://3do-nolaunch.cue");
    assert!(matches!(result, Err(HashError::NotFound(_))));
}

#[test]
fn non_3do_disc_is_rejected() {
    register_disc(
        "mock://not3do.cue",
        MockDisc::single_track(vec![0u8; 2048]),
    );

    let result = threedo("mock://not3do.cue");
    assert!(matches!(result, Err(HashError::FormatMismatch(_))));
}
