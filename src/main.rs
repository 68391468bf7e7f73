#[macro_use]
extern crate log;

use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::exit,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use monkey::{
    errors::errors::Error,
    lexer::{lexer::analyze, tokens::Token},
    parser::parser::parse,
    render_error,
};

const PROMPT: &str = ">> ";

/// Tokenizes and parses monkey source, printing the tokens or the syntax tree
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The file to parse. Reads lines from stdin when omitted.
    file: Option<PathBuf>,

    /// Print the token sequence instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Log parser progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logger = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    } else if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    } else {
        logger.filter_level(log::LevelFilter::Warn);
    }
    logger.init();

    debug!("{args:#?}");

    match &args.file {
        Some(file) => run_file(file, args.tokens),
        None => run_repl(args.tokens),
    }
}

fn run_file(file: &PathBuf, print_tokens: bool) -> Result<()> {
    let source = read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let unit = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());

    let start = Instant::now();
    if let Some(error) = process(&unit, &source, print_tokens, &mut io::stdout())? {
        eprint!("{}", render_error(&error, &source));
        exit(1);
    }
    info!("Processed {} in {:?}", unit, start.elapsed());

    Ok(())
}

fn run_repl(print_tokens: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        if let Some(error) = process("stdin", repl_source(&line), print_tokens, &mut stdout)? {
            writeln!(stdout, "{}", error)?;
        }
    }
}

/// One REPL line without its terminator, so positions stay on line 1.
fn repl_source(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Runs one source unit through the front end and writes the requested dump.
///
/// Returns the first lexical or syntax error of the unit. Failing to write
/// the dump is reported through the outer `Result`.
fn process(
    unit: &str,
    source: &str,
    print_tokens: bool,
    out: &mut impl Write,
) -> Result<Option<Error>> {
    let (tokens, error) = analyze(unit, source);

    if print_tokens {
        print_token_table(&tokens, out)?;
    }
    if error.is_some() {
        return Ok(error);
    }
    if print_tokens {
        return Ok(None);
    }

    match parse(tokens) {
        Ok(program) => {
            writeln!(out, "{:#?}", program)?;
            Ok(None)
        }
        Err(error) => Ok(Some(error)),
    }
}

fn print_token_table(tokens: &[Token], out: &mut impl Write) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}", token)?;
    }
    Ok(())
}
