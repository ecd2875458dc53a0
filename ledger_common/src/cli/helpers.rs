//! Helper functions that are common to CLI apps

use crate::cli::constants::*;
use rust_decimal::Decimal;
use std::io::{stdin, stdout, Write};
use std::str::FromStr;

/// **Contains full variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_full() -> String {
    let msg = format!("{HELP} {DEPOSIT} {WITHDRAW} {BALANCE} {HISTORY} {LEDGER} {TX_LOG} {QUIT}");
    msg
}

/// **Contains short variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_short() -> String {
    "h d w b l t q".to_string()
}

/// **Prints all existing commands in their full and short variants.**
pub fn help() {
    println!("{}", help_contents_full());
    println!("{}", help_contents_short());
}

/// **Reads standard input into a line.**
///
/// Signals an empty line so we can ignore it (in the main loop).
///
/// # Panics
/// Panics in case it can't write `label` to `stdout`,
/// or if it can't flush the `stdout` buffer.
pub fn read_from_stdin(label: &str) -> Option<String> {
    let mut lock = stdout().lock();
    write!(lock, "\n{label}").expect("Failed to write the label to stdout.");
    stdout()
        .flush()
        .expect("Failed to flush the stdout buffer.");

    let mut line = String::new();
    match stdin().read_line(&mut line) {
        Ok(_) => {
            if line.trim().is_empty() {
                None
            } else {
                Some(line.to_owned())
            }
        }
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            None
        }
    }
}

/// **Parses an amount word into a decimal**
///
/// Prints an informative error message and returns `None` when the word
/// isn't a decimal number, so the main loop can move on to the next command.
pub fn parse_amount(word: &str) -> Option<Decimal> {
    match Decimal::from_str(word) {
        Ok(amount) => Some(amount),
        Err(_err) => {
            cannot_parse_number(word);
            None
        }
    }
}

/// Prints an error message about not being able to parse
/// a string into a decimal number, so that our users can get a
/// more informative message than the provided generic message
/// that comes from the `rust_decimal` library.
///
/// This function can be converted into a macro.
pub fn cannot_parse_number(word: &str) {
    eprintln!(
        "[ERROR] Only decimal numbers are allowed as the amount; you provided '{}'.",
        word
    );
}

#[cfg(test)]
mod tests {
    use super::{help_contents_full, help_contents_short, parse_amount};
    use rust_decimal_macros::dec;

    #[test]
    fn test_help_contents() {
        let expected = "help deposit withdraw balance history ledger txlog quit"
            .trim()
            .to_string();
        assert_eq!(help_contents_full(), expected);
    }

    #[test]
    fn test_help_contents_short() {
        let expected = "h d w b l t q".to_string();
        assert_eq!(help_contents_short(), expected);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(Some(dec!(100)), parse_amount("100"));
        assert_eq!(Some(dec!(0.01)), parse_amount("0.01"));
        assert_eq!(Some(dec!(-5)), parse_amount("-5"));
        assert_eq!(None, parse_amount("ten"));
    }
}
