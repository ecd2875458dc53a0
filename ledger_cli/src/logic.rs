//! The interactive command loop driving the ledger engine directly.

use ledger_common::cli::constants::*;
use ledger_common::cli::helpers::*;
use ledger_common::ledger::Ledger;
use ledger_common::tx::TxKind;
use ledger_common::validation;
use ledger_common::NewTransactionRequest;
use rust_decimal::Decimal;

pub fn main_loop() {
    let ledger = Ledger::new();

    loop {
        if let Some(line) = read_from_stdin(PROMPT) {
            let words = line.split_whitespace().collect::<Vec<_>>();
            let cmd = words[0].to_lowercase();

            match cmd.as_str() {
                HELP | "h" => help(),
                DEPOSIT | "d" => deposit(words, &ledger),
                WITHDRAW | "w" => withdraw(words, &ledger),
                BALANCE | "b" => print_balance(&ledger),
                HISTORY | LEDGER | TX_LOG | "l" | "t" => print_history(&ledger),
                QUIT | "q" => break,
                _ => println!("Unrecognized command; try `help`."),
            }
        }
    }
}

/// **Deposit funds into the ledger**
///
/// The description is optional for deposits and can consist of multiple words.
/// We can wrap it in single or double quotes,
/// but we don't have to use any quotes at all.
///
/// Performs the same input validation as the web front end
/// before handing the request to the engine.
///
/// Prints a success or an error message depending on the status of the
/// transaction; an error doesn't break the loop.
fn deposit(words: Vec<&str>, ledger: &Ledger) {
    if words.len() < 2 {
        println!("The deposit command: {DEPOSIT} <amount> ['description']");
        return;
    }

    let amount = match parse_amount(words[1]) {
        Some(amount) => amount,
        None => return,
    };

    record(ledger, amount, TxKind::Deposit, description_from(&words[2..]));
}

/// **Withdraw funds from the ledger**
///
/// The description is required for withdrawals and can consist of multiple
/// words. We can wrap it in single or double quotes,
/// but we don't have to use any quotes at all.
///
/// Performs the same input validation as the web front end
/// before handing the request to the engine.
///
/// Prints a success or an error message depending on the status of the
/// transaction; an error, including insufficient funds, doesn't break the loop.
fn withdraw(words: Vec<&str>, ledger: &Ledger) {
    if words.len() < 3 {
        println!("The withdraw command: {WITHDRAW} <amount> 'description'");
        return;
    }

    let amount = match parse_amount(words[1]) {
        Some(amount) => amount,
        None => return,
    };

    record(
        ledger,
        amount,
        TxKind::Withdrawal,
        description_from(&words[2..]),
    );
}

/// Runs the request through the shared validation rules and, if they pass,
/// records the transaction. All outcomes are printed.
fn record(ledger: &Ledger, amount: Decimal, kind: TxKind, description: Option<String>) {
    let request = NewTransactionRequest {
        amount,
        kind: Some(kind),
        description,
    };

    match validation::validate_new_transaction(&request) {
        Ok(kind) => {
            let tx = ledger.record_transaction(request.amount, kind, request.description);
            println!("{:?}", tx);
        }
        Err(messages) => {
            for message in messages {
                eprintln!("[ERROR] {message}");
            }
        }
    }
}

/// Joins the remaining words into a description, stripping optional quotes.
/// An absent or blank description maps to `None`.
fn description_from(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        return None;
    }

    let description = words.join(" ");
    let description = description.trim_matches(|c| c == '\'' || c == '\"').trim();

    if description.is_empty() {
        None
    } else {
        Some(description.to_string())
    }
}

/// **Prints the current balance**
fn print_balance(ledger: &Ledger) {
    println!("The current balance: {}", ledger.current_balance());
}

/// **Prints the entire ledger (all transactions ever), most recent first**
fn print_history(ledger: &Ledger) {
    println!("The ledger: {:#?}", ledger.transaction_history());
}

#[cfg(test)]
mod tests {
    use super::description_from;

    #[test]
    fn test_description_from() {
        assert_eq!(None, description_from(&[]));
        assert_eq!(None, description_from(&["''"]));
        assert_eq!(Some("Rent".to_string()), description_from(&["Rent"]));
        assert_eq!(
            Some("Monthly rent".to_string()),
            description_from(&["'Monthly", "rent'"])
        );
    }
}
