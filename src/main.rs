use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ponkey::{
    ast::ast::Node,
    display_error,
    lexer::lexer::Scanner,
    parser::parser::{parse, Parser},
};
use tracing::{info, Level};

const PROMPT: &str = ">> ";

#[derive(ClapParser, Debug)]
#[command(name = "ponkey", about = "Scan and parse ponkey source")]
struct Cli {
    /// Source file to parse. Reads lines from stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print tokens instead of the parsed program.
    #[arg(long)]
    tokens: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match &cli.file {
        Some(path) => {
            let source = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let ok = run_file(&source, cli.tokens);
            if !ok {
                process::exit(1);
            }
            Ok(())
        }
        None => repl(cli.tokens),
    }
}

/// Returns `false` when diagnostics were reported.
fn run_file(source: &str, tokens: bool) -> bool {
    if tokens {
        print_tokens(source);
        return true;
    }

    let start = Instant::now();
    let (program, errors) = parse(source);
    info!(elapsed = ?start.elapsed(), statements = program.len(), "parsed");

    for stmt in program.iter() {
        println!("{}", stmt.string());
    }
    for error in &errors {
        eprintln!("{}", display_error(error));
    }

    errors.is_empty()
}

fn print_tokens(source: &str) {
    for token in Scanner::new(source) {
        println!("{}", token);
    }
}

fn repl(tokens: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", PROMPT);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        if tokens {
            print_tokens(&line);
            continue;
        }

        let mut parser = Parser::new(Scanner::new(line));
        let program = parser.parse_program();
        for error in parser.errors() {
            eprintln!("{}", display_error(error));
        }
        if !program.is_empty() {
            println!("{}", program.string());
        }
    }
}
