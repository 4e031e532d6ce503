//! Unit tests for simulated command responses

use shell_lab::commands::{classify, Command};
use shell_lab::execution::{render, CommandResult, SimulatedExecutor, DIRECTORY_LISTING};

const WD: &str = "/home/user";

fn respond(line: &str) -> CommandResult {
    render(&classify(line), WD)
}

#[test]
fn test_help_lists_every_command() {
    let result = respond("help");
    let text = result.text();
    assert!(text.starts_with("Available commands:\n"));
    assert_eq!(text.lines().count(), 12);
    assert!(text.contains("• ls - list directory contents"));
    assert!(text.contains("• cp <source> <dest> - copy file"));
    assert!(text.ends_with("• clear - clear terminal"));
}

#[test]
fn test_clear_is_sentinel() {
    let result = respond("clear");
    assert_eq!(result, CommandResult::Clear);
    assert_eq!(result.text(), "CLEAR");
    assert!(result.is_success());
}

#[test]
fn test_pwd_reports_working_directory() {
    assert_eq!(
        render(&Command::PrintWorkingDirectory, "/srv/lab").text(),
        "/srv/lab"
    );
}

#[test]
fn test_ls_listing_is_fixed() {
    assert_eq!(respond("ls").text(), DIRECTORY_LISTING);
    assert_eq!(
        respond("ls").text(),
        "Documents  Downloads  Pictures  Videos\nexample.txt  script.sh  notes.md"
    );
}

#[test]
fn test_cd_messages() {
    assert_eq!(respond("cd ..").text(), "Changed to parent directory");
    assert_eq!(respond("cd Documents").text(), "Changed to directory: Documents");
}

#[test]
fn test_file_messages() {
    assert_eq!(
        respond("mkdir myproject").text(),
        "Directory 'myproject' created successfully"
    );
    assert_eq!(
        respond("touch readme.txt").text(),
        "File 'readme.txt' created successfully"
    );
    assert_eq!(
        respond("rm archive.txt").text(),
        "File 'archive.txt' removed successfully"
    );
    assert_eq!(
        respond("cp readme.txt backup.txt").text(),
        "Copied 'readme.txt' to 'backup.txt'"
    );
    assert_eq!(
        respond("mv backup.txt archive.txt").text(),
        "Moved 'backup.txt' to 'archive.txt'"
    );
}

#[test]
fn test_cat_sample_content() {
    assert_eq!(
        respond("cat notes.md").text(),
        "Content of notes.md:\nThis is a sample file content.\nYou can view file contents using the cat command."
    );
}

#[test]
fn test_echo_strips_quotes() {
    assert_eq!(respond("echo \"Hello World\"").text(), "Hello World");
    assert_eq!(respond("echo 'it''s'").text(), "its");
    // Redirection is not interpreted
    assert_eq!(
        respond("echo \"Learning Shell\" > learning.txt").text(),
        "Learning Shell > learning.txt"
    );
}

#[test]
fn test_unknown_command_is_the_only_failure() {
    let result = respond("foo");
    assert_eq!(
        result,
        CommandResult::Error("bash: foo: command not found".to_string())
    );
    assert!(!result.is_success());

    for line in ["help", "ls", "pwd", "cd x", "mkdir x", "echo x", "clear"] {
        assert!(respond(line).is_success(), "{line} should succeed");
    }
}

#[test]
fn test_executor_uses_its_working_directory() {
    let executor = SimulatedExecutor::new("/opt/lab");
    assert_eq!(executor.working_directory(), "/opt/lab");

    let (command, result) = executor.execute("  pwd ");
    assert_eq!(command, Command::PrintWorkingDirectory);
    assert_eq!(result.text(), "/opt/lab");
}
