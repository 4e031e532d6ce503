//! Unit tests for command classification
//!
//! Covers keyword matching, argument extraction and the cases that fall
//! through to an unknown command.

use shell_lab::commands::{classify, Command, CommandClassifier};

#[test]
fn test_bare_keywords() {
    assert_eq!(classify("help"), Command::Help);
    assert_eq!(classify("clear"), Command::Clear);
    assert_eq!(classify("pwd"), Command::PrintWorkingDirectory);
    assert_eq!(classify("ls"), Command::ListDirectory);
}

#[test]
fn test_keywords_ignore_case_and_padding() {
    assert_eq!(classify("  PWD  "), Command::PrintWorkingDirectory);
    assert_eq!(classify("Ls"), Command::ListDirectory);
    assert_eq!(classify("HELP\t"), Command::Help);
    assert_eq!(
        classify("CD Documents"),
        Command::ChangeDirectory("Documents".to_string())
    );
}

#[test]
fn test_bare_keyword_with_arguments_is_unknown() {
    // `ls` and `pwd` take no arguments
    assert_eq!(classify("ls -la"), Command::Unknown("ls -la".to_string()));
    assert_eq!(classify("pwd x"), Command::Unknown("pwd x".to_string()));
}

#[test]
fn test_argument_commands() {
    assert_eq!(classify("cd .."), Command::ChangeDirectory("..".to_string()));
    assert_eq!(
        classify("mkdir myproject"),
        Command::MakeDirectory("myproject".to_string())
    );
    assert_eq!(
        classify("touch readme.txt"),
        Command::CreateFile("readme.txt".to_string())
    );
    assert_eq!(
        classify("cat learning.txt"),
        Command::ReadFile("learning.txt".to_string())
    );
    assert_eq!(
        classify("rm archive.txt"),
        Command::RemoveFile("archive.txt".to_string())
    );
}

#[test]
fn test_arguments_keep_their_case_and_inner_spacing() {
    assert_eq!(
        classify("echo \"Hello  World\""),
        Command::Echo("\"Hello  World\"".to_string())
    );
    assert_eq!(
        classify("mkdir My Project"),
        Command::MakeDirectory("My Project".to_string())
    );
}

#[test]
fn test_legacy_lowercase_arguments() {
    let classifier = CommandClassifier::with_lowercase_arguments(true);
    assert!(classifier.lowercases_arguments());
    assert_eq!(
        classifier.classify("cd Documents"),
        Command::ChangeDirectory("documents".to_string())
    );
    assert_eq!(
        classifier.classify("ECHO Hi"),
        Command::Echo("hi".to_string())
    );
    // Unknown lines are reported as typed
    assert_eq!(classifier.classify("Foo"), Command::Unknown("Foo".to_string()));
}

#[test]
fn test_copy_and_move_take_two_operands() {
    assert_eq!(
        classify("cp readme.txt backup.txt"),
        Command::CopyFile {
            source: "readme.txt".to_string(),
            destination: "backup.txt".to_string(),
        }
    );
    assert_eq!(
        classify("mv   a.txt    b.txt   extra"),
        Command::MoveFile {
            source: "a.txt".to_string(),
            destination: "b.txt".to_string(),
        }
    );
    assert_eq!(classify("cp only"), Command::Unknown("cp only".to_string()));
    assert_eq!(classify("mv only"), Command::Unknown("mv only".to_string()));
}

#[test]
fn test_keyword_needs_a_separating_space() {
    assert_eq!(classify("cdx"), Command::Unknown("cdx".to_string()));
    assert_eq!(classify("lsd"), Command::Unknown("lsd".to_string()));
    assert_eq!(classify("echo"), Command::Unknown("echo".to_string()));
    assert_eq!(classify("cd   "), Command::Unknown("cd   ".to_string()));
}

#[test]
fn test_unknown_keeps_raw_line() {
    assert_eq!(classify("foo"), Command::Unknown("foo".to_string()));
    assert_eq!(
        classify("  sudo reboot "),
        Command::Unknown("  sudo reboot ".to_string())
    );
}

#[test]
fn test_command_metadata() {
    assert_eq!(classify("mkdir x").keyword(), Some("mkdir"));
    assert!(classify("cat x").is_recognized());
    assert!(!classify("nope").is_recognized());
    assert_eq!(classify("nope").keyword(), None);
}
