use super::*;

#[test]
fn text_filter_matches_txt_case_insensitively() {
    let filter = FileFilter::TextDocuments;
    assert!(filter.matches(Path::new("/a/notes.txt")));
    assert!(filter.matches(Path::new("/a/NOTES.TXT")));
    assert!(!filter.matches(Path::new("/a/notes.md")));
    assert!(!filter.matches(Path::new("/a/notes")));
}

#[test]
fn all_files_filter_matches_everything() {
    assert!(FileFilter::AllFiles.matches(Path::new("/a/notes")));
    assert!(FileFilter::AllFiles.matches(Path::new("/a/notes.md")));
}

#[test]
fn default_extension_is_added_only_when_missing() {
    let filter = FileFilter::TextDocuments;
    assert_eq!(
        filter.with_default_extension(PathBuf::from("/a/notes")),
        PathBuf::from("/a/notes.txt")
    );
    assert_eq!(
        filter.with_default_extension(PathBuf::from("/a/notes.md")),
        PathBuf::from("/a/notes.md")
    );
    assert_eq!(
        FileFilter::AllFiles.with_default_extension(PathBuf::from("/a/notes")),
        PathBuf::from("/a/notes")
    );
}

#[test]
fn filter_toggle_cycles() {
    assert_eq!(FileFilter::TextDocuments.toggle(), FileFilter::AllFiles);
    assert_eq!(FileFilter::AllFiles.toggle(), FileFilter::TextDocuments);
    assert_eq!(FileFilter::default(), FileFilter::TextDocuments);
}

#[test]
fn message_constructors_set_kind() {
    assert_eq!(Message::info("t", "x").kind, MessageKind::Info);
    assert_eq!(Message::error("t", "x").kind, MessageKind::Error);
}
