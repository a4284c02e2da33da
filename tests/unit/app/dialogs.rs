use super::*;
use crate::kernel::services::adapters::LocalFileProvider;
use crate::tui::ScriptedEventSource;
use ratatui::backend::TestBackend;
use std::path::Path;
use tempfile::tempdir;

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 24)).unwrap()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn backdrop_with(text: &str) -> Buffer {
    let mut buffer = Buffer::empty(Rect::new(0, 0, 100, 24));
    buffer.set_string(0, 0, text, Style::default());
    buffer
}

fn run<R>(
    events: Vec<InputEvent>,
    base_dir: &Path,
    f: impl FnOnce(&mut TuiDialogs<'_, TestBackend>) -> R,
) -> (R, String) {
    let mut terminal = terminal();
    let mut source = ScriptedEventSource::new(events);
    let files = LocalFileProvider::new();
    let result = {
        let mut dialogs = TuiDialogs::new(
            &mut terminal,
            &mut source,
            &files,
            UiTheme::default(),
            backdrop_with("EDITOR BACKDROP"),
        )
        .with_base_dir(base_dir.to_path_buf());
        f(&mut dialogs)
    };
    let screen = screen_text(&terminal);
    (result, screen)
}

#[test]
fn confirm_maps_keys_to_choices() {
    let dir = tempdir().unwrap();
    for (code, expected) in [
        (KeyCode::Char('y'), ConfirmChoice::Save),
        (KeyCode::Enter, ConfirmChoice::Save),
        (KeyCode::Char('N'), ConfirmChoice::Discard),
        (KeyCode::Esc, ConfirmChoice::Cancel),
    ] {
        let (choice, _) = run(vec![key(code)], dir.path(), |d| {
            d.confirm_save_changes("untitled.txt")
        });
        assert_eq!(choice, expected);
    }
}

#[test]
fn confirm_ignores_unrelated_keys_and_renders_prompt() {
    let dir = tempdir().unwrap();
    let (choice, screen) = run(
        vec![key(KeyCode::Char('x')), key(KeyCode::Char('n'))],
        dir.path(),
        |d| d.confirm_save_changes("notes.txt"),
    );
    assert_eq!(choice, ConfirmChoice::Discard);
    assert!(screen.contains(CONFIRM_TEXT));
    assert!(screen.contains("notes.txt"));
    assert!(screen.contains("[Esc] Cancel"));
    assert!(screen.contains("EDITOR BACKDROP"));
}

#[test]
fn confirm_cancels_when_input_ends() {
    let dir = tempdir().unwrap();
    let (choice, _) = run(Vec::new(), dir.path(), |d| d.confirm_save_changes("a.txt"));
    assert_eq!(choice, ConfirmChoice::Cancel);
}

#[test]
fn message_waits_for_enter() {
    let dir = tempdir().unwrap();
    let mut source_events = vec![key(KeyCode::Char('q')), key(KeyCode::Enter)];
    source_events.push(key(KeyCode::Char('z')));
    let mut terminal = terminal();
    let mut source = ScriptedEventSource::new(source_events);
    let files = LocalFileProvider::new();
    {
        let mut dialogs = TuiDialogs::new(
            &mut terminal,
            &mut source,
            &files,
            UiTheme::default(),
            backdrop_with(""),
        )
        .with_base_dir(dir.path().to_path_buf());
        dialogs.show_message(&Message::error("Error", "Error saving file: denied"));
    }
    assert_eq!(source.remaining(), 1);
    let screen = screen_text(&terminal);
    assert!(screen.contains("Error saving file: denied"));
    assert!(screen.contains("[Enter] OK"));
}

#[test]
fn choose_path_accepts_typed_name_with_default_extension() {
    let dir = tempdir().unwrap();
    let mut events: Vec<InputEvent> = "doc".chars().map(|c| key(KeyCode::Char(c))).collect();
    events.push(key(KeyCode::Enter));

    let (path, _) = run(events, dir.path(), |d| {
        d.choose_path(&PathRequest::save(PathBuf::new()))
    });
    assert_eq!(path, Some(dir.path().join("doc.txt")));
}

#[test]
fn save_over_existing_file_asks_before_replacing() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "keep").unwrap();
    let typed = || vec![key(KeyCode::Char('a')), key(KeyCode::Enter)];

    let mut events = typed();
    events.push(key(KeyCode::Char('y')));
    let (path, screen) = run(events, dir.path(), |d| {
        d.choose_path(&PathRequest::save(PathBuf::new()))
    });
    assert_eq!(path, Some(dir.path().join("a.txt")));
    assert!(screen.contains(" Confirm Save As "));
    assert!(screen.contains("a.txt already exists. Replace existing file?"));
    assert!(screen.contains("[Y] Yes"));

    // No 回到选择框，之后可以换个名字
    let mut events = typed();
    events.push(key(KeyCode::Char('n')));
    events.push(key(KeyCode::Backspace));
    events.extend("b.txt".chars().map(|c| key(KeyCode::Char(c))));
    events.push(key(KeyCode::Enter));
    let (path, screen) = run(events, dir.path(), |d| {
        d.choose_path(&PathRequest::save(PathBuf::new()))
    });
    assert_eq!(path, Some(dir.path().join("b.txt")));
    assert!(screen.contains(" Save As "));
    assert_eq!(std::fs::read_to_string(dir.path().join("a.txt")).unwrap(), "keep");

    let mut events = typed();
    events.push(key(KeyCode::Esc));
    events.push(key(KeyCode::Esc));
    let (path, _) = run(events, dir.path(), |d| {
        d.choose_path(&PathRequest::save(PathBuf::new()))
    });
    assert_eq!(path, None);
}

#[test]
fn open_existing_file_needs_no_replace_prompt() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), "keep").unwrap();
    let events = vec![
        key(KeyCode::Char('a')),
        key(KeyCode::Char('.')),
        key(KeyCode::Char('t')),
        key(KeyCode::Char('x')),
        key(KeyCode::Char('t')),
        key(KeyCode::Enter),
    ];
    let (path, _) = run(events, dir.path(), |d| {
        d.choose_path(&PathRequest::open(PathBuf::new()))
    });
    assert_eq!(path, Some(dir.path().join("a.txt")));
}

#[test]
fn replace_choice_maps_yes_and_no() {
    let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);
    assert_eq!(replace_choice_for(&plain(KeyCode::Char('Y'))), Some(true));
    assert_eq!(replace_choice_for(&plain(KeyCode::Enter)), Some(true));
    assert_eq!(replace_choice_for(&plain(KeyCode::Char('n'))), Some(false));
    assert_eq!(replace_choice_for(&plain(KeyCode::Esc)), Some(false));
    assert_eq!(replace_choice_for(&plain(KeyCode::Char('d'))), None);
}

#[test]
fn choose_path_cancel_and_eof_return_none() {
    let dir = tempdir().unwrap();
    let (path, screen) = run(vec![key(KeyCode::Esc)], dir.path(), |d| {
        d.choose_path(&PathRequest::open(PathBuf::new()))
    });
    assert_eq!(path, None);
    assert!(screen.contains("Text documents (*.txt)"));

    let (path, _) = run(Vec::new(), dir.path(), |d| {
        d.choose_path(&PathRequest::open(PathBuf::new()))
    });
    assert_eq!(path, None);
}

#[test]
fn picker_lists_directory_entries() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("letter.txt"), "x").unwrap();
    let (_, screen) = run(vec![key(KeyCode::Esc)], dir.path(), |d| {
        d.choose_path(&PathRequest::open(PathBuf::new()))
    });
    assert!(screen.contains("letter.txt"));
    assert!(screen.contains(" Open "));
}

#[test]
fn confirm_choice_ignores_modified_keys() {
    let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
    assert_eq!(confirm_choice_for(&ctrl_n), None);
    let d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
    assert_eq!(confirm_choice_for(&d), Some(ConfirmChoice::Discard));
}

#[test]
fn tail_fit_keeps_end_of_long_paths() {
    assert_eq!(tail_fit("short", 10), "short");
    assert_eq!(tail_fit("/very/long/path.txt", 9), "…path.txt");
}
