//! # Tally Terminal Entry Point
//!
//! Thin binary wrapper: parse options, hand off to the library. The REPL
//! itself lives in `lib.rs` for better testability.

use clap::Parser;

use tally_terminal::TerminalArgs;

fn main() -> std::io::Result<()> {
    tally_terminal::run(TerminalArgs::parse())
}
