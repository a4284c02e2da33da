use super::*;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn test_read_write_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.txt");

    let provider = LocalFileProvider::new();

    provider.write_text(&file_path, "Hello, World!").unwrap();
    let content = provider.read_text(&file_path).unwrap();
    assert_eq!(content, "Hello, World!");
}

#[test]
fn test_round_trip_is_byte_exact() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("mixed.txt");
    let text = "第一行\r\nsecond\n\tthird\rlast";

    let provider = LocalFileProvider::new();
    provider.write_text(&file_path, text).unwrap();

    assert_eq!(fs::read(&file_path).unwrap(), text.as_bytes());
    assert_eq!(provider.read_text(&file_path).unwrap(), text);
}

#[test]
fn test_read_strips_utf8_bom() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bom.txt");
    fs::write(&file_path, b"\xEF\xBB\xBFhello").unwrap();

    let provider = LocalFileProvider::new();
    assert_eq!(provider.read_text(&file_path).unwrap(), "hello");
}

#[test]
fn test_leading_feff_survives_round_trip() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("feff.txt");
    let text = "\u{feff}abc";

    let provider = LocalFileProvider::new();
    provider.write_text(&file_path, text).unwrap();

    assert_eq!(fs::read(&file_path).unwrap(), b"\xEF\xBB\xBF\xEF\xBB\xBFabc");
    assert_eq!(provider.read_text(&file_path).unwrap(), text);
}

#[test]
fn test_invalid_utf8_is_read_failure() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.txt");
    fs::write(&file_path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let provider = LocalFileProvider::new();
    assert!(matches!(
        provider.read_text(&file_path),
        Err(FileError::InvalidEncoding(_))
    ));
}

#[test]
fn test_not_found_error() {
    let provider = LocalFileProvider::new();
    let result = provider.read_text(Path::new("/nonexistent/file.txt"));
    assert!(matches!(result, Err(FileError::NotFound(_))));
}

#[test]
fn test_read_directory_is_not_a_file() {
    let dir = tempdir().unwrap();
    let provider = LocalFileProvider::new();
    assert!(matches!(
        provider.read_text(dir.path()),
        Err(FileError::NotAFile(_))
    ));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("missing").join("out.txt");

    let provider = LocalFileProvider::new();
    let err = provider.write_text(&file_path, "x").unwrap_err();
    assert!(matches!(err, FileError::Write { ref path, .. } if path == &file_path));
}

#[test]
fn test_read_dir_lists_directories_first() {
    let dir = tempdir().unwrap();

    fs::create_dir(dir.path().join("subdir")).unwrap();
    File::create(dir.path().join("b.txt")).unwrap();
    File::create(dir.path().join("A.txt")).unwrap();

    let provider = LocalFileProvider::new();
    let entries = provider.read_dir(dir.path()).unwrap();

    assert_eq!(entries.len(), 3);
    assert!(entries[0].is_dir);
    assert_eq!(entries[0].name, "subdir");
    assert_eq!(entries[1].name, "A.txt");
    assert_eq!(entries[2].name, "b.txt");
    assert!(provider.is_dir(dir.path()));
    assert!(provider.is_file(&dir.path().join("b.txt")));
    assert!(!provider.is_file(dir.path()));
}
