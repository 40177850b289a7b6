use super::*;
use crate::testutil::{IsoFile, MockDisc, build_iso_track, md5_hex, register_disc};

/// A PS-X EXE whose header declares `payload` bytes after itself.
fn make_psx_exe(payload: usize) -> Vec<u8> {
    let mut exe = vec![0u8; 2048 + payload];
    exe[..8].copy_from_slice(b"PS-X EXE");
    exe[28..32].copy_from_slice(&(payload as u32).to_le_bytes());
    for (i, byte) in exe[2048..].iter_mut().enumerate() {
        *byte = (i % 233) as u8;
    }
    exe
}

#[test]
fn psx_hashes_boot_name_and_executable() {
    let exe = make_psx_exe(1000);
    let data = build_iso_track(
        0,
        &[
            IsoFile {
                name: "SYSTEM.CNF",
                content: b"BOOT = cdrom:\\SLUS_012.34;1\r\nTCB = 4\r\n",
            },
            IsoFile {
                name: "SLUS_012.34",
                content: &exe,
            },
        ],
    );
    register_disc("mock://psx.cue", MockDisc::single_track(data));

    let mut expected = b"SLUS_012.34".to_vec();
    expected.extend_from_slice(&exe);

    assert_eq!(playstation("mock://psx.cue").unwrap(), md5_hex(&expected));
}

#[test]
fn psx_exe_header_overrides_declared_size() {
    // ISO directory record claims more than the PS-X EXE header: the
    // header wins, so only header + payload bytes are hashed
    let exe = make_psx_exe(1000);
    let mut oversized = exe.clone();
    oversized.resize(exe.len() + 2048, 0xEE);

    let data = build_iso_track(
        0,
        &[
            IsoFile {
                name: "SYSTEM.CNF",
                content: b"BOOT=cdrom:\\GAME.EXE;1\r\n",
            },
            IsoFile {
                name: "GAME.EXE",
                content: &oversized,
            },
        ],
    );
    register_disc("mock://psx-size.cue", MockDisc::single_track(data));

    let mut expected = b"GAME.EXE".to_vec();
    expected.extend_from_slice(&exe);

    assert_eq!(
        playstation("mock://psx-size.cue").unwrap(),
        md5_hex(&expected)
    );
}

#[test]
fn psx_falls_back_to_psx_exe() {
    let exe = make_psx_exe(500);
    let data = build_iso_track(0, &[IsoFile {
        name: "PSX.EXE",
        content: &exe,
    }]);
    register_disc("mock://psx-fallback.cue", MockDisc::single_track(data));

    let mut expected = b"PSX.EXE".to_vec();
    expected.extend_from_slice(&exe);

    assert_eq!(
        playstation("mock://psx-fallback.cue").unwrap(),
        md5_hex(&expected)
    );
}

#[test]
fn psx_without_any_executable_is_an_error() {
    let data = build_iso_track(0, &[IsoFile {
        name: "README.TXT",
        content: b"nothing bootable",
    }]);
    register_disc("mock://psx-empty.cue", MockDisc::single_track(data));

    let result = playstation("mock://psx-empty.cue");
    assert!(matches!(result, Err(HashError::NotFound(_))));
}

#[test]
fn psx_missing_marker_keeps_declared_size() {
    // no PS-X EXE marker: the ISO-declared size is hashed as-is
    let exe: Vec<u8> = (0..3000u32).map(|i| (i % 227) as u8).collect();
    let data = build_iso_track(
        0,
        &[
            IsoFile {
                name: "SYSTEM.CNF",
                content: b"BOOT = cdrom:\\RAW.EXE;1\r\n",
            },
            IsoFile {
                name: "RAW.EXE",
                content: &exe,
            },
        ],
    );
    register_disc("mock://psx-raw.cue", MockDisc::single_track(data));

    let mut expected = b"RAW.EXE".to_vec();
    expected.extend_from_slice(&exe);

    assert_eq!(
        playstation("mock://psx-raw.cue").unwrap(),
        md5_hex(&expected)
    );
}

#[test]
fn ps2_hashes_boot2_executable() {
    let mut exe = vec![0u8; 3000];
    exe[..4].copy_from_slice(b"\x7fELF");
    for (i, byte) in exe[4..].iter_mut().enumerate() {
        *byte = (i % 229) as u8;
    }

    let data = build_iso_track(
        0,
        &[
            IsoFile {
                name: "SYSTEM.CNF",
                content: b"BOOT2 = cdrom0:\\SLES_123.45;1\r\nVER = 1.00\r\n",
            },
            IsoFile {
                name: "SLES_123.45",
                content: &exe,
            },
        ],
    );
    register_disc("mock://ps2.cue", MockDisc::single_track(data));

    let mut expected = b"SLES_123.45".to_vec();
    expected.extend_from_slice(&exe);

    assert_eq!(playstation2("mock://ps2.cue").unwrap(), md5_hex(&expected));
}

#[test]
fn ps2_does_not_read_boot_key_without_the_2() {
    // a PSX-style BOOT key is not a PS2 boot line
    let data = build_iso_track(0, &[IsoFile {
        name: "SYSTEM.CNF",
        content: b"BOOT = cdrom:\\SLUS_012.34;1\r\n",
    }]);
    register_disc("mock://ps2-psx.cue", MockDisc::single_track(data));

    assert!(playstation2("mock://ps2-psx.cue").is_err());
}
