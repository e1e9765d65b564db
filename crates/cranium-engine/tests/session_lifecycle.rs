use std::fs;

use cranium_engine::editing::{
    CursorStep, FontSizeClass, Session, SessionError, SessionOptions, SessionState,
};
use cranium_engine::parsing::snapshot;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn options() -> SessionOptions {
    SessionOptions::default()
}

#[test]
fn save_of_open_reproduces_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    let original = "# Notes\r\n\n> quote\n- *a*\n```\nraw\n```\n\u{1F600} tail";
    fs::write(&path, original).unwrap();

    let mut session = Session::open(&path, options()).unwrap();
    session.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn insert_and_delete_scenario() {
    let mut session = Session::from_bytes(b"abc", options()).unwrap();
    session.set_cursor_offset(3).unwrap();
    session.insert_text("X").unwrap();
    session.delete_range(0, 1).unwrap();
    assert_eq!(session.text(), b"bcX");
}

#[test]
fn down_then_up_returns_to_start() {
    let mut session = Session::from_bytes(b"line one\nline two", options()).unwrap();
    session.move_cursor_down().unwrap();
    assert_eq!(session.cursor().metrics.line, 1);
    session.move_cursor_up().unwrap();
    assert_eq!(session.cursor().offset, 0);
}

/// A long run of mixed operations keeps the cursor inside the text and the
/// tree consistent with the text it was parsed from.
#[test]
fn cursor_stays_clamped_through_random_edits() {
    for step in [CursorStep::CodePoint, CursorStep::Byte] {
        let mut session = Session::from_bytes(
            "# start\n- é item\n> q".as_bytes(),
            SessionOptions { cursor_step: step },
        )
        .unwrap();

        let mut seed: u64 = 42;
        for _ in 0..500 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let pick = (seed >> 33) as usize;
            let len = session.len();
            let result = match pick % 9 {
                0 => session.insert_text("ab\n").map(drop),
                1 => session.insert_text("- ").map(drop),
                2 => session.delete_backward().map(drop),
                3 => session.delete_forward().map(drop),
                4 => session
                    .delete_range(pick % (len + 1), (pick / 7) % (len + 1))
                    .map(drop),
                5 => session.move_cursor_left().map(drop),
                6 => session.move_cursor_right().map(drop),
                7 => session.move_cursor_up().map(drop),
                _ => session.set_cursor_offset(pick % (len + 2)).map(drop),
            };
            result.unwrap();
            assert!(session.cursor().offset <= session.len());
            assert_eq!(session.state(), SessionState::Idle);
            assert_eq!(session.text().len(), session.len());
            snapshot::invariants(session.text(), session.root());
        }
    }
}

#[test]
fn reparse_of_same_text_is_identical() {
    let text = b"## a\n\n- b\n  - c\n> d";
    let mut session = Session::from_bytes(text, options()).unwrap();
    let before = session.root().clone();

    session.set_cursor_offset(2).unwrap();
    session.insert_text("x").unwrap();
    session.delete_backward().unwrap();

    assert_eq!(session.text(), text);
    assert_eq!(session.root(), &before);
    assert!(session.generation() > 0);
}

#[test]
fn line_table_tracks_headings() {
    let mut session = Session::from_bytes(b"title\nbody", options()).unwrap();
    assert_eq!(session.lines()[0].font_size, FontSizeClass::Base);

    session.insert_text("### ").unwrap();
    let sizes: Vec<_> = session.lines().iter().map(|l| l.font_size).collect();
    assert_eq!(sizes, vec![FontSizeClass::Heading(3), FontSizeClass::Base]);
}

#[test]
fn closed_session_reports_closed() {
    let mut session = Session::from_bytes(b"x", options()).unwrap();
    session.close();
    assert!(matches!(session.delete_backward(), Err(SessionError::Closed)));
    assert!(matches!(session.save_as("/tmp/never"), Err(SessionError::Closed)));
}
