//! Integration Tests for the Session Transcript

use shell_lab::config::TerminalConfig;
use shell_lab::{EntryKind, TerminalSession};

fn kinds(session: &TerminalSession) -> Vec<EntryKind> {
    session.entries().iter().map(|e| e.kind).collect()
}

#[test]
fn test_mixed_session_transcript() {
    let mut session = TerminalSession::new("/home/user");
    session.submit("pwd");
    session.submit("foo");
    session.submit("echo 'done'");

    assert_eq!(
        kinds(&session),
        [
            EntryKind::Output,
            EntryKind::Output,
            EntryKind::Input,
            EntryKind::Output,
            EntryKind::Input,
            EntryKind::Error,
            EntryKind::Input,
            EntryKind::Output,
        ]
    );
    let texts: Vec<&str> = session.entries()[2..].iter().map(|e| e.text.as_str()).collect();
    assert_eq!(
        texts,
        [
            "/home/user$ pwd",
            "/home/user",
            "/home/user$ foo",
            "bash: foo: command not found",
            "/home/user$ echo 'done'",
            "done",
        ]
    );
}

#[test]
fn test_input_entry_keeps_raw_line() {
    let mut session = TerminalSession::default();
    session.submit("  LS  ");
    let input = &session.entries()[2];
    assert_eq!(input.kind, EntryKind::Input);
    assert_eq!(input.text, "/home/user$   LS  ");
}

#[test]
fn test_multiline_output_is_one_entry() {
    let mut session = TerminalSession::default();
    session.submit("help");
    let entry = session.entries().last().unwrap();
    assert_eq!(entry.kind, EntryKind::Output);
    assert_eq!(entry.lines().count(), 12);
}

#[test]
fn test_clear_then_continue() {
    let mut session = TerminalSession::default();
    session.submit("ls");
    session.submit("clear");
    assert_eq!(session.entry_count(), 0);

    session.submit("pwd");
    assert_eq!(kinds(&session), [EntryKind::Input, EntryKind::Output]);
}

#[test]
fn test_custom_prompt_and_banner() {
    let config = TerminalConfig {
        working_directory: "~/lab".to_string(),
        prompt_delimiter: " % ".to_string(),
        welcome_banner: vec!["hi".to_string()],
        ..TerminalConfig::default()
    };
    let mut session = TerminalSession::from_config(&config);
    assert_eq!(session.entries()[0].text, "hi");

    session.submit("pwd");
    assert_eq!(session.entries()[1].text, "~/lab % pwd");
    assert_eq!(session.entries()[2].text, "~/lab");
}

#[test]
fn test_entries_are_timestamped_in_order() {
    let mut session = TerminalSession::default();
    session.submit("ls");
    session.submit("pwd");
    let entries = session.entries();
    assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert!(entries[0].timestamp >= session.start_time);
}

#[test]
fn test_json_export_round_trips() {
    let mut session = TerminalSession::default();
    session.submit("nope");
    let json = session.export_transcript_json().unwrap();
    let parsed: Vec<shell_lab::TranscriptEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_slice(), session.entries());
}
