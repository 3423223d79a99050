use anyhow::{Context, Result};
use clap::Parser;
use keycalc::keys::parse_key_sequence;
use keycalc::{Config, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keypad calculator for the terminal.
///
/// Keys are typed as-is (`12.5*3=`); named keys go in braces
/// (`{Enter}`, `{Backspace}`, `{Escape}`, `{F9}`).
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Args {
    /// Press these keys and print the display, instead of reading stdin.
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the calculator state as JSON instead of the display.
    #[arg(long)]
    json: bool,

    /// Path to the config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show numbers without thousands separators.
    #[arg(long)]
    no_grouping: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keycalc=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if args.no_grouping {
        config.display.grouping = false;
    }

    let mut session = Session::new(&config);

    match args.keys {
        Some(keys) => {
            session.feed(parse_key_sequence(&keys)?);
            print_session(&session, args.json)
        }
        None => run_interactive(&mut session, args.json),
    }
}

fn print_session(session: &Session, json: bool) -> Result<()> {
    if json {
        println!("{}", session.state_json()?);
    } else {
        println!("{}", session.display());
    }
    Ok(())
}

/// Read key sequences from stdin, one line at a time.
fn run_interactive(session: &mut Session, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", session.display());

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            match command.trim() {
                "q" | "quit" => break,
                "state" => println!("{}", session.state_json()?),
                "copy" => match session.copy() {
                    Ok(()) => println!("copied {}", session.display()),
                    Err(e) => {
                        tracing::warn!(error = %e, "copy failed");
                        eprintln!("{e}");
                    }
                },
                other => eprintln!("unknown command `:{other}`"),
            }
            continue;
        }

        match parse_key_sequence(line) {
            Ok(tokens) => {
                session.feed(tokens);
                print_session(session, json)?;
            }
            Err(e) => eprintln!("{e}"),
        }

        stdout.flush()?;
    }

    Ok(())
}
