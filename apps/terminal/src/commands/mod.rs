//! # Terminal Commands
//!
//! Every user action at the prompt maps to one command handler.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (grammar, dispatch)
//! ├── cart.rs     ◄─── add, remove, view, discount
//! └── invoice.rs  ◄─── invoice (generate), download
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Command Dispatch Flow                           │
//! │                                                                     │
//! │  "> add Milk 2.50 2"                                                │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  Command::parse ── tokenize, pick the handler shape                 │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  dispatch(session, command)                                         │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  handler: parse inputs ──► core operation ──► render result         │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  Ok(Outcome::Output("Item added to cart!")) or Err(ShellError)      │
//! │                                                                     │
//! │  Parsing and guards run BEFORE the core is invoked, so a rejected   │
//! │  command never mutates the cart.                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod invoice;

use std::str::FromStr;

use crate::error::ShellError;
use crate::render;
use crate::session::Session;
use crate::sink::InvoiceSink;

/// One parsed user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name> <price> <quantity>` - name may contain spaces; the
    /// last two tokens are price and quantity
    Add {
        name: String,
        price: String,
        quantity: String,
    },

    /// `remove <item number>` - 1-based ordinal as shown by `view`
    Remove { ordinal: String },

    /// `view` - render the cart items and total
    View,

    /// `discount <amount>` - set the flat cart discount
    Discount { amount: String },

    /// `invoice` - print the invoice and reset the cart
    Invoice,

    /// `download` - persist the invoice and reset the cart on success
    Download,

    /// `help`
    Help,

    /// `quit` / `exit`
    Quit,
}

impl Command {
    /// Tokenizes one input line. `Ok(None)` means a blank line (nothing
    /// to do). Numeric fields stay raw here; handlers parse them so a
    /// malformed number rejects the command as a whole.
    pub fn parse(line: &str) -> Result<Option<Command>, ShellError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "add" => {
                // name may span several tokens; price and quantity are
                // always the trailing two
                let Some((rest, numeric)) = args.len().checked_sub(2).map(|n| args.split_at(n))
                else {
                    return Err(ShellError::Usage("add <name> <price> <quantity>"));
                };
                if rest.is_empty() {
                    return Err(ShellError::Usage("add <name> <price> <quantity>"));
                }
                Command::Add {
                    name: rest.join(" "),
                    price: numeric[0].to_string(),
                    quantity: numeric[1].to_string(),
                }
            }
            "remove" => match args {
                [ordinal] => Command::Remove {
                    ordinal: ordinal.to_string(),
                },
                _ => return Err(ShellError::Usage("remove <item number>")),
            },
            "discount" => match args {
                [amount] => Command::Discount {
                    amount: amount.to_string(),
                },
                _ => return Err(ShellError::Usage("discount <amount>")),
            },
            "view" => Command::View,
            "invoice" => Command::Invoice,
            "download" => Command::Download,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

/// Result of dispatching one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Output(String),

    /// Terminate the REPL
    Quit,
}

/// Routes a parsed command to its handler.
pub fn dispatch<S: InvoiceSink>(
    session: &mut Session<S>,
    command: Command,
) -> Result<Outcome, ShellError> {
    let output = match command {
        Command::Add {
            name,
            price,
            quantity,
        } => cart::add(session, &name, &price, &quantity)?,
        Command::Remove { ordinal } => cart::remove(session, &ordinal)?,
        Command::View => cart::view(session)?,
        Command::Discount { amount } => cart::discount(session, &amount)?,
        Command::Invoice => invoice::generate(session)?,
        Command::Download => invoice::download(session)?,
        Command::Help => render::HELP.to_string(),
        Command::Quit => return Ok(Outcome::Quit),
    };
    Ok(Outcome::Output(output))
}

/// Parses one user-supplied numeric field, naming the field in the
/// rejection message.
pub(crate) fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ShellError> {
    raw.parse().map_err(|_| ShellError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_line_is_none() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_parse_add() {
        let command = Command::parse("add Milk 2.50 2").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Add {
                name: "Milk".to_string(),
                price: "2.50".to_string(),
                quantity: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_multiword_name() {
        let command = Command::parse("add Coca Cola 330ml 2.99 6").unwrap().unwrap();
        assert_eq!(
            command,
            Command::Add {
                name: "Coca Cola 330ml".to_string(),
                price: "2.99".to_string(),
                quantity: "6".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_add_too_few_args() {
        assert!(matches!(
            Command::parse("add Milk 2.50"),
            Err(ShellError::Usage(_))
        ));
        assert!(matches!(Command::parse("add"), Err(ShellError::Usage(_))));
    }

    #[test]
    fn test_parse_keyword_is_case_insensitive() {
        assert_eq!(Command::parse("VIEW").unwrap(), Some(Command::View));
        assert_eq!(Command::parse("Quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("exit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(matches!(err, ShellError::UnknownCommand(_)));
        assert!(err.to_string().contains("frobnicate"));
    }

    #[test]
    fn test_dispatch_help_and_quit() {
        let mut session = Session::new(crate::sink::testing::MemorySink::default());

        let help = dispatch(&mut session, Command::Help).unwrap();
        assert!(matches!(help, Outcome::Output(text) if text.contains("add <name>")));

        let quit = dispatch(&mut session, Command::Quit).unwrap();
        assert_eq!(quit, Outcome::Quit);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        let err = parse_number::<f64>("price", "abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid price: 'abc' is not a number");

        assert_eq!(parse_number::<i64>("quantity", "3").unwrap(), 3);
    }
}
