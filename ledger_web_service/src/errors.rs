//! Rejection types and their mapping to HTTP responses.

use ledger_common::errors::LedgerError;
use ledger_common::ErrorResponse;
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::reject::Reject;
use warp::{Rejection, Reply};

/// Field-level validation failures, one message per violated rule.
#[derive(Debug)]
pub struct WebServiceValidationError(pub Vec<String>);

impl Reject for WebServiceValidationError {}

/// A business-rule failure raised by the ledger engine.
#[derive(Debug)]
pub struct WebServiceLedgerError(pub LedgerError);

impl Reject for WebServiceLedgerError {}

/// **Maps rejections to JSON error responses**
///
/// Validation failures and engine errors are the client's fault and map to
/// 400; anything unrecognized maps to 500 with a generic message, so
/// internals never leak to the caller.
pub async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.".to_string())
    } else if let Some(err) = rejection.find::<WebServiceValidationError>() {
        (StatusCode::BAD_REQUEST, err.0.join(" "))
    } else if let Some(err) = rejection.find::<WebServiceLedgerError>() {
        (StatusCode::BAD_REQUEST, err.0.to_string())
    } else if let Some(err) = rejection.find::<warp::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, err.to_string())
    } else if rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed.".to_string(),
        )
    } else {
        log::error!("unhandled rejection: {:?}", rejection);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred.".to_string(),
        )
    };

    let body = warp::reply::json(&ErrorResponse { message });
    Ok(warp::reply::with_status(body, status))
}
