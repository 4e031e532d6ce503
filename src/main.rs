//! Shell Lab - practice shell commands in a simulated terminal
//!
//! Reads command lines from standard input, prints the simulated terminal's
//! answers and follows the selected lesson's progress.

use std::cell::Cell;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use anyhow::Context;
use tracing::{debug, error, info};

use shell_lab::lessons::LessonCatalog;
use shell_lab::{handle_startup_error, init, init_with_config, RuntimeConfig, Submission, Tutor};

/// Lines that leave the REPL instead of being submitted
const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];

/// ANSI clear screen + cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Command line arguments
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Lesson to practice
    lesson: Option<String>,
    /// List lessons and exit
    list: bool,
    /// Enable debug logging
    debug: bool,
    /// Write the transcript here on exit
    transcript_path: Option<PathBuf>,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self, String> {
        Self::parse_from(env::args().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = String>) -> Result<Self, String> {
        let mut app_args = AppArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().ok_or("Missing config file path")?;
                    app_args.config_path = Some(PathBuf::from(path));
                }
                "--lesson" | "-l" => {
                    app_args.lesson = Some(args.next().ok_or("Missing lesson id")?);
                }
                "--transcript" | "-t" => {
                    let path = args.next().ok_or("Missing transcript file path")?;
                    app_args.transcript_path = Some(PathBuf::from(path));
                }
                "--list" => {
                    app_args.list = true;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("Shell Lab v{}", shell_lab::VERSION);
                    process::exit(0);
                }
                other if other.starts_with('-') => {
                    return Err(format!("Unknown option: {}", other));
                }
                other => {
                    return Err(format!("Unexpected argument: {}", other));
                }
            }
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("Shell Lab - practice shell commands in a simulated terminal");
    println!();
    println!("USAGE:");
    println!("    shell-lab [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -l, --lesson <ID>      Lesson to practice (see --list)");
    println!("    -t, --transcript <PATH> Save the session transcript on exit (.json or text)");
    println!("        --list             List available lessons and exit");
    println!("    -d, --debug            Enable debug logging");
    println!("    -?, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("Type 'help' inside the terminal for the supported commands,");
    println!("and 'exit' or 'quit' to leave.");
    println!();
    println!("ENVIRONMENT:");
    println!("    SHELL_LAB_CONFIG       Path to configuration file");
    println!("    SHELL_LAB_DEBUG        Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        eprintln!();
        print_help();
        process::exit(2);
    });

    init_logging(args.debug);
    info!("Starting Shell Lab v{}", shell_lab::VERSION);

    let runtime_config = load_configuration(&args).unwrap_or_else(|e| {
        error!("Startup failed: {}", e);
        eprintln!("{}", handle_startup_error(&e));
        process::exit(1);
    });

    if args.list {
        print_lessons(runtime_config.catalog(), &mut io::stdout())
            .context("failed to print lessons")?;
        return Ok(());
    }

    let mut tutor = create_tutor(&args, &runtime_config).unwrap_or_else(|e| {
        eprintln!("{}", handle_startup_error(&e));
        process::exit(1);
    });

    let matched = Rc::new(Cell::new(0usize));
    let counter = Rc::clone(&matched);
    tutor = tutor.on_command_complete(move |line, is_expected| {
        debug!("Submitted {:?} (expected: {})", line, is_expected);
        if is_expected {
            counter.set(counter.get() + 1);
        }
    });

    run_repl(&mut tutor).context("terminal I/O failed")?;

    if let Some(path) = &args.transcript_path {
        tutor
            .session()
            .save_transcript(path)
            .with_context(|| format!("failed to save transcript to {}", path.display()))?;
        println!("Transcript saved to {}", path.display());
    }

    let stats = tutor.session().statistics();
    println!();
    println!(
        "{} commands, {} not found, {} matched the lesson",
        stats.total_commands,
        stats.failed_commands,
        matched.get()
    );
    info!("Shell Lab shutdown complete");
    Ok(())
}

/// Initialize logging based on the debug flag
fn init_logging(debug: bool) {
    let debug = debug
        || env::var("SHELL_LAB_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let log_level = if debug { "debug" } else { "warn" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Load configuration from the requested file or the default locations
fn load_configuration(args: &AppArgs) -> shell_lab::Result<RuntimeConfig> {
    match &args.config_path {
        Some(path) => init_with_config(path),
        None => init(),
    }
}

/// Create the tutor for the requested (or configured default) lesson
fn create_tutor(args: &AppArgs, runtime_config: &RuntimeConfig) -> shell_lab::Result<Tutor> {
    let config = runtime_config.config();
    let lesson_id = args
        .lesson
        .as_deref()
        .or(config.lessons.default_lesson.as_deref());

    match lesson_id {
        Some(id) => {
            let lesson = runtime_config.catalog().get(id)?.clone();
            Ok(Tutor::for_lesson(lesson, &config.terminal))
        }
        None => Ok(Tutor::new(&config.terminal)),
    }
}

/// Print the lesson catalog
fn print_lessons(catalog: &LessonCatalog, out: &mut impl Write) -> io::Result<()> {
    for lesson in catalog.list() {
        write!(
            out,
            "{:<8} {:<24} {:<13} {} steps  {}",
            lesson.id,
            lesson.title,
            lesson.difficulty.to_string(),
            lesson.expected_commands.len(),
            lesson.description
        )?;
        match lesson.repeated_step() {
            Some(step) => writeln!(out, " (stops at step {}: repeats a completed command)", step + 1)?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

/// Read lines until end of input or an exit command
fn run_repl(tutor: &mut Tutor) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Some(lesson) = tutor.lesson() {
        writeln!(stdout, "Lesson {}: {}", lesson.id, lesson.title)?;
    }
    print_entries(tutor, &mut stdout)?;
    print_hint(tutor, &mut stdout)?;

    loop {
        write!(stdout, "{}", tutor.session().prompt())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if EXIT_COMMANDS.contains(&line.trim()) {
            break;
        }

        if let Some(submission) = tutor.submit(line) {
            print_submission(tutor, &submission, &mut stdout)?;
        }
    }

    Ok(())
}

/// Print the answer to one submission and any progress it made
///
/// The learner already sees the typed line, so only the response is printed.
fn print_submission(tutor: &Tutor, submission: &Submission, out: &mut impl Write) -> io::Result<()> {
    if submission.result.is_clear() {
        write!(out, "{}", CLEAR_SCREEN)?;
        print_entries(tutor, out)?;
    } else {
        writeln!(out, "{}", submission.result.text())?;
    }

    if submission.matched() {
        let progress = tutor.progress();
        writeln!(
            out,
            "[{}/{}] {:.0}% complete",
            progress.completed, progress.total, progress.percent
        )?;
        if progress.is_complete() {
            writeln!(out, "Lesson complete!")?;
        } else {
            print_hint(tutor, out)?;
        }
    }
    Ok(())
}

/// Print the whole transcript
fn print_entries(tutor: &Tutor, out: &mut impl Write) -> io::Result<()> {
    for entry in tutor.session().entries() {
        writeln!(out, "{}", entry.text)?;
    }
    Ok(())
}

/// Print the current exercise, if the lesson describes one
fn print_hint(tutor: &Tutor, out: &mut impl Write) -> io::Result<()> {
    let plan = tutor.plan();
    if plan.is_stalled() {
        writeln!(
            out,
            "Note: step {} repeats '{}', which is already completed; this lesson cannot advance further.",
            plan.cursor() + 1,
            plan.current_target().unwrap_or_default()
        )?;
    } else if let Some(exercise) = tutor.current_exercise() {
        writeln!(out, "Next: {} ({})", exercise.description, exercise.command)?;
    }
    Ok(())
}
