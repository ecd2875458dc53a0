use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// **A transaction kind**
///
/// A deposit increases the balance; a withdrawal decreases it.
///
/// Serialized on the wire as the `"type"` field with the variant name spelled out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxKind {
    Deposit,
    Withdrawal,
}

/// **A single recorded transaction**
///
/// Immutable once created; the engine assigns `id` and `timestamp` at creation time.
///
/// Transactions should be able to rebuild the ledger's state
/// when they are applied in the same sequence to an empty state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tx {
    pub id: Uuid,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}
