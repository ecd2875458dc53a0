//! The "Ledger CLI" app's entry point.

use ledger_cli::logic::main_loop;

/// The "Ledger CLI" app's entry point.
fn main() {
    main_loop();
}
