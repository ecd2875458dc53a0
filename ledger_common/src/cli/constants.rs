/// CLI Commands

pub const HELP: &str = "help";
pub const DEPOSIT: &str = "deposit";
pub const WITHDRAW: &str = "withdraw";
pub const BALANCE: &str = "balance";
pub const HISTORY: &str = "history";
pub const LEDGER: &str = "ledger";
pub const TX_LOG: &str = "txlog";
pub const QUIT: &str = "quit";

/// Various CLI constants

pub const PROMPT: &str = "> ";
