mod error;
mod generate;
mod palette;

use clap::{Parser, ValueEnum};
use error::Error;
use generate::complex_expression;
use palette::{paint_depths, Ansi};
use paren_compute::{trace, Brackets, Ctxt, Unmarked, DEFAULT_MAX_STEPS};
use paren_parser::parse;
use rand::{rngs::StdRng, SeedableRng};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf, process::ExitCode};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// The depth of expressions generated by `:random` in the REPL when none is given.
const DEFAULT_RANDOM_DEPTH: usize = 2;

#[derive(Parser)]
#[command(name = "paren")]
#[command(about = "Simplify parenthesized expressions one innermost group at a time")]
struct Cli {
    /// File to read expressions from, one per line. If omitted, expressions are read from stdin,
    /// or an interactive session is started if stdin is a terminal.
    file: Option<PathBuf>,

    /// Generate and simplify a random boolean expression nested this many levels deep.
    #[arg(long, value_name = "DEPTH", conflicts_with = "file")]
    random: Option<usize>,

    /// Seed for random expressions.
    #[arg(long)]
    seed: Option<u64>,

    /// How to highlight the group being reduced in each step.
    #[arg(long, value_enum, default_value_t = MarkerKind::Ansi)]
    marker: MarkerKind,

    /// Give up on an expression after this many steps.
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Print each trace as a line of JSON.
    #[arg(long)]
    json: bool,
}

/// The choices for `--marker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MarkerKind {
    /// Terminal colors.
    Ansi,

    /// Square brackets.
    Brackets,

    /// No highlighting.
    #[value(name = "none")]
    Plain,
}

impl Cli {
    /// Builds the evaluation context described by the arguments.
    fn ctxt(&self) -> Ctxt {
        let ctxt = Ctxt::default().with_max_steps(self.max_steps);
        match self.marker {
            MarkerKind::Ansi => ctxt.with_marker(Ansi),
            MarkerKind::Brackets => ctxt.with_marker(Brackets),
            MarkerKind::Plain => ctxt.with_marker(Unmarked),
        }
    }

    /// Creates the random number generator for generated expressions.
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Traces the given expression and prints its steps.
fn print_trace(source: &str, ctxt: &Ctxt, cli: &Cli) -> Result<(), Error> {
    let trace = trace(source, ctxt)?;
    if cli.json {
        println!("{}", serde_json::to_string(&trace)?);
        return Ok(());
    }

    if cli.marker == MarkerKind::Ansi {
        // trace succeeded, so the source parses
        if let Ok(expr) = parse(source) {
            println!("{}", paint_depths(&expr));
        }
    }

    for step in &trace.steps {
        println!("  {}", step.before);
        println!("→ {}", step.after);
    }
    println!("= {}", trace.answer);
    Ok(())
}

/// Traces the given expression, printing the steps or reporting the failure. Returns true on
/// success.
fn read_eval(source: &str, ctxt: &Ctxt, cli: &Cli) -> bool {
    match print_trace(source, ctxt, cli) {
        Ok(()) => true,
        Err(err) => {
            err.report_to_stderr();
            false
        },
    }
}

/// Traces every non-blank line of the input. Returns true if every line succeeded.
fn read_eval_lines(input: &str, ctxt: &Ctxt, cli: &Cli) -> bool {
    input.lines()
        .filter(|line| !line.trim().is_empty())
        .fold(true, |ok, line| read_eval(line, ctxt, cli) && ok)
}

/// Runs the interactive session until end of input.
fn repl(ctxt: &Ctxt, cli: &Cli) -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;
    let mut rng = cli.rng();

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;

        if let Some(arg) = input.trim().strip_prefix(":random") {
            let depth = match arg.trim() {
                "" => DEFAULT_RANDOM_DEPTH,
                arg => match arg.parse() {
                    Ok(depth) => depth,
                    Err(err) => {
                        eprintln!("error: invalid depth `{}`: {}", arg, err);
                        continue;
                    },
                },
            };
            let source = complex_expression(depth, &mut rng);
            println!("{}", source);
            read_eval(&source, ctxt, cli);
        } else {
            read_eval(&input, ctxt, cli);
        }
    }
}

fn run(cli: &Cli) -> Result<bool, Error> {
    let ctxt = cli.ctxt();
    debug!(?ctxt, "starting");

    if let Some(depth) = cli.random {
        let source = complex_expression(depth, &mut cli.rng());
        if !cli.json {
            println!("{}", source);
        }
        Ok(read_eval(&source, &ctxt, cli))
    } else if let Some(path) = &cli.file {
        let input = fs::read_to_string(path)?;
        Ok(read_eval_lines(&input, &ctxt, cli))
    } else if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(read_eval_lines(&input, &ctxt, cli))
    } else {
        repl(&ctxt, cli)?;
        Ok(true)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            err.report_to_stderr();
            ExitCode::FAILURE
        },
    }
}
