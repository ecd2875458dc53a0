//! The "Ledger Web Service's" entry point.

use ledger_common::ledger::Ledger;
use ledger_web_service::{errors, handlers};
use std::env;
use std::sync::Arc;
use warp::Filter;

/// The "Ledger Web Service's" entry point.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "ledger=info");
    }
    pretty_env_logger::init();

    let log = warp::log("ledger");

    // The one engine instance for the process's lifetime; every handler
    // shares it by handle. The lock lives inside the engine.
    let ledger = Arc::new(Ledger::new());
    let ledger_state = warp::any().map(move || ledger.clone());

    let record_transaction = warp::path!("api" / "transactions")
        .and(warp::post())
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::json())
        .and(ledger_state.clone())
        .and_then(handlers::record_transaction);

    let transaction_history = warp::path!("api" / "transactions")
        .and(warp::get())
        .and(ledger_state.clone())
        .and_then(handlers::transaction_history);

    let current_balance = warp::path!("api" / "balances")
        .and(warp::get())
        .and(ledger_state.clone())
        .and_then(handlers::current_balance);

    let routes = record_transaction
        .or(transaction_history)
        .or(current_balance)
        .recover(errors::handle_rejection)
        .with(log);

    // Start up the server
    warp::serve(routes).run(([127, 0, 0, 1], 8080)).await;
}
