//! Interactive entry point of the turnways interpreter. Prompts for a file
//! path (rotated, like everything else it shows), reads the path back as
//! vertical input, and runs the file.

use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::{Parser, ValueEnum};
use log::debug;

use turnways::{page::PageBuffer, rotate::flip, runner};

/// Struct containing the CLI configuration for the turnways interpreter.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Specify the log level of the interpreter.
    #[arg(value_enum, short, long, default_value_t = LogLevel::default())]
    verbosity: LogLevel,
}

/// Enum for specifying the log level.
#[derive(ValueEnum, Clone, Default, Debug)]
enum LogLevel {
    /// The default log level. Only critical errors will be logged.
    #[default]
    #[value(alias("0"))]
    Error,

    /// A log level, where also warnings are logged.
    #[value(alias("1"))]
    Warn,

    /// Also log information about the general state of the interpreter,
    /// e.g., which file is run.
    #[value(alias("2"))]
    Info,

    /// Log everything which happens internally in the interpreter.
    #[value(alias("3"))]
    Debug,

    /// Log extra information. This can include more precise debug output.
    #[value(alias("4"))]
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Read vertical input: consecutive non-empty lines joined by newline,
/// until a blank line (or EOF) ends the block.
fn vertical_input(input: &mut impl BufRead) -> io::Result<String> {
    let mut whole = String::new();

    loop {
        let mut piece = String::new();
        if input.read_line(&mut piece)? == 0 {
            break;
        }

        let piece = piece.trim_end_matches(|c| c == '\r' || c == '\n');
        if piece.is_empty() {
            break;
        }

        if !whole.is_empty() {
            whole.push('\n');
        }
        whole.push_str(piece);
    }

    Ok(whole)
}

fn main() -> io::Result<()> {
    let args = Cli::parse();

    simple_logger::init_with_level(args.verbosity.into()).unwrap();

    let stdout = io::stdout();
    let mut sink = stdout.lock();

    let mut page = PageBuffer::new();
    page.append("Enter file path to source code:");
    page.flush(&mut sink)?;
    sink.flush()?;

    let stdin = io::stdin();
    let path = flip(&vertical_input(&mut stdin.lock())?);
    debug!("resolved input path '{path}'");

    match fs::read_to_string(&path) {
        Ok(raw) => runner::run(&raw, &mut sink)?,
        Err(_) => {
            page.append(&format!("File '{path}' not found. Please try again."));
            page.flush(&mut sink)?;
        }
    }

    Ok(())
}
