use rust_decimal::Decimal;
use thiserror::Error;

/// **An application-specific error type**
///
/// Business-rule failures raised by the ledger engine itself.
/// Field-level validation failures never appear here; those belong to
/// the request layer (see the [`crate::validation`] module).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A withdrawal would drive the balance negative. Nothing was recorded.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// A zero or negative amount reached the engine. The request layer
    /// validates amounts first; the engine re-checks rather than trusting it.
    #[error("transaction amount must be positive; got {0}")]
    NonPositiveAmount(Decimal),
}
