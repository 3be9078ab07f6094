use std::{
    error::Error,
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use hausalang::{
    ElseKeyword, InterpreterOptions, ParseOptions, Session, TopLevelReturn,
    interpreter::{evaluator::core::DEFAULT_MAX_CALL_DEPTH, lexer::strip_comment},
};

/// The file extension Hausalang programs must carry.
const SOURCE_EXTENSION: &str = "ha";

/// hausalang runs programs written in Hausalang, a small programming language
/// with Hausa keywords. With no file and no `-e`, it starts an interactive
/// session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A Hausalang program to run. Must end in `.ha`.
    file: Option<PathBuf>,

    /// Runs the given code instead of a file.
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "file")]
    code: Option<String>,

    /// Accepts `mayar` outside a function; it evaluates its expression and
    /// does nothing else.
    #[arg(long)]
    allow_top_level_return: bool,

    /// Accepts a shortened else keyword such as `in ba`.
    #[arg(long)]
    lenient_else: bool,

    /// Maximum number of nested function calls.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions { top_level_return: if self.allow_top_level_return {
                           TopLevelReturn::Ignore
                       } else {
                           TopLevelReturn::Reject
                       },
                       else_keyword:     if self.lenient_else {
                           ElseKeyword::Lenient
                       } else {
                           ElseKeyword::Strict
                       }, }
    }

    const fn interpreter_options(&self) -> InterpreterOptions {
        InterpreterOptions { max_call_depth: self.max_call_depth }
    }
}

/// Installs a `tracing` subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_writer(io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let mut session = Session::with_options(args.parse_options(), args.interpreter_options());

    let result = match (&args.file, &args.code) {
        (Some(path), _) => run_file(&mut session, path),
        (None, Some(code)) => run_source(&mut session, code),
        (None, None) => repl(&mut session),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Kuskure: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs a `.ha` file.
fn run_file(session: &mut Session, path: &Path) -> Result<(), Box<dyn Error>> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(format!("'{}' is not a Hausalang file (expected a .{SOURCE_EXTENSION} \
                            extension)",
                           path.display()).into());
    }

    let source = fs::read_to_string(path).map_err(|e| {
                                             format!("failed to read '{}': {e}", path.display())
                                         })?;
    run_source(session, &source)
}

/// Runs source text, writing program output to stdout.
fn run_source(session: &mut Session, source: &str) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout().lock();
    let result = session.execute(source, &mut stdout);
    stdout.flush()?;
    result?;
    Ok(())
}

/// Reads chunks from stdin and runs each one in the same session.
///
/// A line that opens a block (ends with `:`) starts a chunk that continues
/// until a blank line; any other line is a chunk by itself. Errors are
/// reported and the session carries on. `fita` or end of input leaves.
fn repl(session: &mut Session) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt(">>> ")?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim() == "fita" {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let mut chunk = line;
        if opens_block(&chunk) {
            loop {
                prompt("... ")?;
                let Some(next) = lines.next().transpose()? else {
                    break;
                };
                if next.trim().is_empty() {
                    break;
                }
                chunk.push('\n');
                chunk.push_str(&next);
            }
        }
        chunk.push('\n');

        let mut output = Vec::new();
        let result = session.execute(&chunk, &mut output);

        let mut stdout = io::stdout().lock();
        stdout.write_all(&output)?;
        if !output.is_empty() && !output.ends_with(b"\n") {
            writeln!(stdout)?;
        }
        stdout.flush()?;

        if let Err(e) = result {
            eprintln!("Kuskure: {e}");
        }
    }

    Ok(())
}

fn prompt(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{text}")?;
    stdout.flush()
}

/// Returns `true` if the line's code, ignoring any comment, ends with `:`.
fn opens_block(line: &str) -> bool {
    strip_comment(line).trim_end().ends_with(':')
}
