use super::*;
use std::io::Write;

#[test]
fn default_backend_reads_real_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"hello rom").unwrap();

    let mut handle = open_file(file.path().to_str().unwrap()).unwrap();
    let mut contents = Vec::new();
    handle.read_to_end(&mut contents).unwrap();
    assert_eq!(contents, b"hello rom");
}

#[test]
fn default_backend_seeks_and_tells() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 4096]).unwrap();

    let mut handle = open_file(file.path().to_str().unwrap()).unwrap();
    let size = handle.seek(io::SeekFrom::End(0)).unwrap();
    assert_eq!(size, 4096);

    handle.seek(io::SeekFrom::Start(4000)).unwrap();
    let mut buf = [0u8; 128];
    assert_eq!(handle.read(&mut buf).unwrap(), 96);
}

#[test]
fn missing_file_is_an_open_error() {
    let err = match open_file("/nonexistent/romprint/file.bin") {
        Ok(_) => panic!("expected an error"),
        Err(e) => e,
    };
    assert!(matches!(err, HashError::FileOpen { .. }));
}
