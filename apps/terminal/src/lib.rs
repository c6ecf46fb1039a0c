//! # Tally Terminal Library
//!
//! The Presentation Shell for Tally POS: a synchronous CLI REPL that
//! drives one cart through the core's command surface.
//!
//! ## Module Organization
//! ```text
//! tally_terminal/
//! ├── lib.rs          ◄─── You are here (options, REPL loop)
//! ├── session.rs      ◄─── The one live Cart + invoice sink
//! ├── commands/
//! │   ├── mod.rs      ◄─── Grammar and dispatch
//! │   ├── cart.rs     ◄─── add, remove, view, discount
//! │   └── invoice.rs  ◄─── invoice, download
//! ├── sink.rs         ◄─── InvoiceSink trait + FileSink
//! ├── render.rs       ◄─── Cart view and help text
//! └── error.rs        ◄─── ShellError (user-facing messages)
//! ```
//!
//! ## Session Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        REPL Lifecycle                               │
//! │                                                                     │
//! │  1. Initialize Logging ───────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, logs on stderr            │
//! │     • Default: INFO, override with RUST_LOG                         │
//! │                                                                     │
//! │  2. Resolve Invoice Path ─────────────────────────────────────────► │
//! │     • --output flag, else TALLY_INVOICE_PATH, else ./invoice.txt    │
//! │                                                                     │
//! │  3. Create Session ───────────────────────────────────────────────► │
//! │     • Empty cart, FileSink for downloads                            │
//! │                                                                     │
//! │  4. Loop: read line → parse → dispatch → print ───────────────────► │
//! │     • Errors print their message and the loop continues             │
//! │     • 'quit' / EOF ends the session                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod session;
pub mod sink;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{dispatch, Command, Outcome};
use session::Session;
use sink::{FileSink, DEFAULT_INVOICE_FILE};

/// Command-line options for the terminal shell.
#[derive(Debug, Parser)]
#[command(name = "tally", about = "Point-of-sale cart manager", version)]
pub struct TerminalArgs {
    /// Invoice output path (overrides TALLY_INVOICE_PATH)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Runs the terminal shell until `quit` or end of input.
pub fn run(args: TerminalArgs) -> io::Result<()> {
    init_tracing();

    let path = invoice_path(&args);
    info!(path = %path.display(), "starting tally terminal");

    let mut session = Session::new(FileSink::new(path));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("Tally POS - type 'help' for commands.");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // end of input
        }

        match Command::parse(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match dispatch(&mut session, command) {
                Ok(Outcome::Output(text)) => println!("{text}"),
                Ok(Outcome::Quit) => break,
                Err(err) => println!("{err}"),
            },
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // logs go to stderr so they never interleave with cart or invoice
    // text on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolves the invoice destination path.
///
/// ## Priority
/// 1. `--output` flag
/// 2. `TALLY_INVOICE_PATH` environment variable
/// 3. `invoice.txt` in the working directory, overwritten per download
fn invoice_path(args: &TerminalArgs) -> PathBuf {
    if let Some(path) = &args.output {
        return path.clone();
    }

    if let Ok(path) = std::env::var("TALLY_INVOICE_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(DEFAULT_INVOICE_FILE)
}
