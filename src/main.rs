use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use intcalc::{
    logging::{init_logging, level_for_verbosity},
    repl::{DEFAULT_PROMPT, Mode, Repl, process_line},
};
use tracing::error;

/// intcalc evaluates integer arithmetic expressions with `+ - * /`,
/// parentheses and floor division.
///
/// Without an expression it starts an interactive prompt; type "exit" to quit.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as the path of a file and evaluate each of its
    /// non-blank lines.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Print the token stream instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Prompt shown by the interactive session.
    #[arg(long, env = "INTCALC_PROMPT", default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Expression to evaluate, or a file path with --file.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(level_for_verbosity(args.verbose));

    let mode = if args.tokens { Mode::Tokens } else { Mode::Evaluate };

    match args.contents {
        None => run_interactive(&args.prompt, mode),
        Some(path) if args.file => run_file(&path, mode),
        Some(expression) => match process_line(&expression, mode) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        },
    }
}

fn run_interactive(prompt: &str, mode: Mode) -> ExitCode {
    let stdin = io::stdin();
    match Repl::new(prompt, mode).run(stdin.lock(), io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "interactive session aborted");
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_file(path: &str, mode: Mode) -> ExitCode {
    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
        return ExitCode::FAILURE;
    };

    let mut stdout = io::stdout().lock();
    let mut failed = false;
    for line in script.lines().filter(|l| !l.trim().is_empty()) {
        let written = match process_line(line, mode) {
            Ok(text) => writeln!(stdout, "{text}"),
            Err(e) => {
                failed = true;
                writeln!(stdout, "{e}")
            },
        };
        if let Err(e) = written {
            eprintln!("I/O error: {e}");
            return ExitCode::FAILURE;
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
