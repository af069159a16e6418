use anyhow::Error;
use clap::{Parser, ValueEnum};
use keycalc::{parse_keys, Session};
use std::io::BufRead;
use std::io::Write;
use tracing_subscriber::EnvFilter;

/// Keypad calculator. Keys are digits, `+ - * /`, `.`, `=`, `c` and the words
/// `del` and `clear`. Put `--` before keys starting with an operator, as in
/// `keycalc -- -5*2=`.
#[derive(Parser, Debug)]
#[command(version, about, allow_negative_numbers = true)]
struct Cli {
    /// Keys to press. Reads keys line by line from stdin when omitted.
    keys: Vec<String>,

    /// Which part of the display to print.
    #[arg(long, value_enum, default_value_t = Show::Expression)]
    show: Show,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Show {
    Expression,
    Entry,
    Both,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let lock = stdout.lock();
    let mut w = std::io::BufWriter::new(lock);

    if !cli.keys.is_empty() {
        press_args(&cli.keys, &mut w, cli.show)?;
    } else {
        let stdin = std::io::stdin();
        let reader = std::io::BufReader::new(stdin);
        let is_interactive = atty::is(atty::Stream::Stdin);
        press_lines(reader, &mut w, cli.show, is_interactive)?;
    }
    w.flush()?;

    Ok(())
}

fn press_args(keys: &[String], w: &mut impl Write, show: Show) -> Result<(), Error> {
    let mut session = Session::default();
    for arg in keys {
        for intent in parse_keys(arg) {
            session.handle(intent);
        }
    }
    render(w, &session, show)
}

// One session for the whole input, the display is printed after every line
fn press_lines(
    reader: impl BufRead,
    w: &mut impl Write,
    show: Show,
    is_interactive: bool,
) -> Result<(), Error> {
    let mut session = Session::default();

    if is_interactive {
        write!(w, ">>> ")?;
        w.flush()?;
    }

    for line in reader.lines() {
        for intent in parse_keys(&line?) {
            session.handle(intent);
        }

        render(w, &session, show)?;
        if is_interactive {
            write!(w, ">>> ")?;
        }
        w.flush()?;
    }

    Ok(())
}

fn render(w: &mut impl Write, session: &Session, show: Show) -> Result<(), Error> {
    match show {
        Show::Expression => writeln!(w, "{}", session.full_expression())?,
        Show::Entry => writeln!(w, "{}", session.current_entry())?,
        Show::Both => {
            writeln!(w, "{}", session.full_expression())?;
            writeln!(w, "{}", session.current_entry())?;
        }
    }
    Ok(())
}
