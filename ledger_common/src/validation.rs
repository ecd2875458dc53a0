//! Field-level validation rules for new transaction requests
//!
//! Every front end applies these rules before invoking the ledger engine,
//! so the engine only ever sees a known transaction kind and a vetted
//! amount. The engine still re-checks amount positivity on its own.

use crate::requests::NewTransactionRequest;
use crate::tx::TxKind;
use rust_decimal::Decimal;

/// The longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

pub const NON_POSITIVE_AMOUNT_MSG: &str = "Amount must be greater than zero.";
pub const MISSING_KIND_MSG: &str = "Transaction type is required.";
pub const DESCRIPTION_TOO_LONG_MSG: &str = "Description cannot exceed 500 characters.";
pub const DESCRIPTION_REQUIRED_MSG: &str = "Description is required for withdrawals.";

/// **Basic input validation for a new transaction request**
///
/// Checks for:
/// - A positive amount;
/// - A present transaction type;
/// - A description of at most [`MAX_DESCRIPTION_LEN`] characters;
/// - A non-blank description when the type is a withdrawal.
///
/// All violated rules are reported together. On success the caller gets the
/// concrete [`TxKind`] back, so there is no transaction type left to unwrap.
pub fn validate_new_transaction(request: &NewTransactionRequest) -> Result<TxKind, Vec<String>> {
    let mut errors = Vec::new();

    if request.amount <= Decimal::ZERO {
        errors.push(NON_POSITIVE_AMOUNT_MSG.to_string());
    }

    if request.kind.is_none() {
        errors.push(MISSING_KIND_MSG.to_string());
    }

    if let Some(description) = &request.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(DESCRIPTION_TOO_LONG_MSG.to_string());
        }
    }

    if request.kind == Some(TxKind::Withdrawal) && !has_description(request) {
        errors.push(DESCRIPTION_REQUIRED_MSG.to_string());
    }

    match request.kind {
        Some(kind) if errors.is_empty() => Ok(kind),
        _ => Err(errors),
    }
}

fn has_description(request: &NewTransactionRequest) -> bool {
    request
        .description
        .as_deref()
        .map_or(false, |description| !description.trim().is_empty())
}
