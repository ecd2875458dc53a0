//! Handler functions

use crate::errors::{WebServiceLedgerError, WebServiceValidationError};
use chrono::Utc;
use ledger_common::ledger::Ledger;
use ledger_common::validation;
use ledger_common::{BalanceResponse, NewTransactionRequest};
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// The `record_transaction` handler
///
/// Validates the request, records the transaction, and responds with
/// 201 Created and the created record.
///
/// POST /api/transactions
pub async fn record_transaction(
    request: NewTransactionRequest,
    ledger: Arc<Ledger>,
) -> Result<impl Reply, Rejection> {
    log::debug!("record_transaction; request = {:?}", request);

    let kind = match validation::validate_new_transaction(&request) {
        Ok(kind) => kind,
        Err(messages) => {
            log::warn!("record_transaction rejected: {}", messages.join(" "));
            return Err(warp::reject::custom(WebServiceValidationError(messages)));
        }
    };

    match ledger.record_transaction(request.amount, kind, request.description) {
        Ok(tx) => Ok(warp::reply::with_status(
            warp::reply::json(&tx),
            StatusCode::CREATED,
        )),
        Err(ledger_err) => Err(warp::reject::custom(WebServiceLedgerError(ledger_err))),
    }
}

/// The `current_balance` handler
///
/// Responds with the current balance and the UTC instant of the read.
///
/// GET /api/balances
pub async fn current_balance(ledger: Arc<Ledger>) -> Result<impl Reply, Infallible> {
    log::debug!("current_balance");

    let response = BalanceResponse {
        balance: ledger.current_balance(),
        date: Utc::now(),
    };

    Ok(warp::reply::json(&response))
}

/// The `transaction_history` handler
///
/// Responds with the entire ledger (all transactions ever), most recent first.
///
/// GET /api/transactions
pub async fn transaction_history(ledger: Arc<Ledger>) -> Result<impl Reply, Infallible> {
    log::debug!("transaction_history");

    let history = ledger.transaction_history();

    Ok(warp::reply::json(&history))
}
