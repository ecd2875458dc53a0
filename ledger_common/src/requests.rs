use crate::tx::TxKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// **A request to record a new transaction**
///
/// `kind` is optional on the wire so a missing `"type"` field reaches the
/// validation rules instead of failing deserialization; a missing `amount`
/// defaults to zero for the same reason.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewTransactionRequest {
    #[serde(default)]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: Option<TxKind>,
    pub description: Option<String>,
}

/// **The current balance plus the UTC instant of the read**
#[derive(Debug, Deserialize, Serialize)]
pub struct BalanceResponse {
    pub balance: Decimal,
    pub date: DateTime<Utc>,
}

/// **The uniform error body shape**
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
