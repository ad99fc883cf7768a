use std::{fs, path::PathBuf, process};

use clap::{Parser, Subcommand};

use loxide::{LoxError, Repl, scanner};

#[derive(Parser)]
#[command(author, version, about = "Loxide scanner for the Lox language")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a Lox script and print its token stream
    Scan { script: PathBuf },
    /// Start an interactive scanning session
    Repl,
    /// Scan a snippet of Lox source passed on the command line
    Eval { source: String },
}

fn main() -> Result<(), LoxError> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Repl) {
        Command::Scan { script } => scan_script(script),
        Command::Repl => {
            let mut repl = Repl::new();
            repl.run()
        }
        Command::Eval { source } => {
            scan_source(&source);
            Ok(())
        }
    }
}

fn scan_script(path: PathBuf) -> Result<(), LoxError> {
    let source = fs::read_to_string(&path)?;
    scan_source(&source);
    Ok(())
}

fn scan_source(source: &str) {
    let (tokens, diagnostics) = scanner::tokenize(source);
    for token in &tokens {
        println!("{token}");
    }
    if !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            eprintln!("{diagnostic}");
        }
        // Lexical errors surface as the sysexits data-error status.
        process::exit(65);
    }
}
