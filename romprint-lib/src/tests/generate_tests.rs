use super::*;
use std::io::Write;

use crate::testutil::md5_hex;

#[test]
fn buffer_dispatch_rejects_disc_consoles() {
    let result = generate_from_buffer(Console::PlayStation, b"not a disc");
    assert!(matches!(
        result,
        Err(HashError::UnsupportedConsole { .. })
    ));
}

#[test]
fn file_dispatch_rejects_iterator_only_consoles() {
    let result = generate_from_file(Console::SharpX1, "game.2d");
    assert!(matches!(
        result,
        Err(HashError::UnsupportedConsole { .. })
    ));

    let result = generate_from_file(Console::ThomsonTo8, "game.fd");
    assert!(matches!(
        result,
        Err(HashError::UnsupportedConsole { .. })
    ));
}

#[test]
fn whole_file_console_agrees_with_buffer_hash() {
    let contents: Vec<u8> = (0..40_000u32).map(|i| (i % 256) as u8).collect();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&contents).unwrap();
    let path = file.path().to_str().unwrap();

    let from_file = generate_from_file(Console::GameBoy, path).unwrap();
    let from_buffer = generate_from_buffer(Console::GameBoy, &contents).unwrap();
    assert_eq!(from_file, from_buffer);
    assert_eq!(from_file, md5_hex(&contents));
}

#[test]
fn headered_console_dispatches_through_the_buffer_recipe() {
    let rom = vec![0x3Cu8; 8192];
    let mut contents = vec![0u8; 16];
    contents[..4].copy_from_slice(b"NES\x1a");
    contents.extend_from_slice(&rom);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&contents).unwrap();

    let hash = generate_from_file(Console::Nes, file.path().to_str().unwrap()).unwrap();
    assert_eq!(hash, md5_hex(&rom));
}

#[test]
fn playlist_redirects_to_the_first_disc() {
    let dir = tempfile::tempdir().unwrap();

    let disc_contents = b"whole file contents of the disc image";
    std::fs::write(dir.path().join("game.dsk"), disc_contents).unwrap();
    std::fs::write(dir.path().join("game.m3u"), "game.dsk\n").unwrap();

    let playlist = dir.path().join("game.m3u");
    let hash = generate_from_file(Console::Msx, playlist.to_str().unwrap()).unwrap();
    assert_eq!(hash, md5_hex(disc_contents));
}

#[test]
fn playlist_redirection_reports_missing_discs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("empty.m3u"), "# no entries\n").unwrap();

    let playlist = dir.path().join("empty.m3u");
    let result = generate_from_file(Console::PlayStation, playlist.to_str().unwrap());
    assert!(matches!(result, Err(HashError::NotFound(_))));
}

#[test]
fn errors_reach_the_error_sink() {
    use std::sync::{Arc, Mutex};

    let messages: Arc<Mutex<Vec<String>>> = Arc::default();
    let captured = Arc::clone(&messages);
    romprint_core::set_error_handler(Some(Arc::new(move |message: &str| {
        captured.lock().unwrap().push(message.to_string());
    })));

    let _ = generate_from_buffer(Console::PlayStation2, b"x");

    romprint_core::set_error_handler(None);

    // other tests may be failing concurrently into the same sink; only
    // require that our message arrived
    let messages = messages.lock().unwrap();
    assert!(
        messages
            .iter()
            .any(|m| m.contains("Unsupported console for buffer hash"))
    );
}
