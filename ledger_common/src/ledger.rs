use crate::errors::LedgerError;
use crate::tx::{Tx, TxKind};
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use uuid::Uuid;

/// **A type for managing the transaction log and its derived balance**
///
/// Owns an append-only, insertion-ordered log of [`Tx`] records behind a
/// single guard. The balance is never stored; it is recomputed from the log.
///
/// The guard lives inside the engine so that every caller, including
/// concurrent request handlers sharing an `Arc<Ledger>`, goes through the
/// same critical section. For a withdrawal, the balance check and the append
/// happen under one acquisition of the guard; two concurrent withdrawals can
/// never both pass the check and jointly overdraw the ledger.
#[derive(Debug)]
pub struct Ledger {
    log: Mutex<Vec<Tx>>,
}

impl Ledger {
    /// Returns an empty instance of the [`Ledger`] type
    pub fn new() -> Self {
        Ledger {
            log: Mutex::new(Vec::new()),
        }
    }

    /// **Records a deposit or a withdrawal**
    ///
    /// Assigns a fresh id and the current UTC timestamp, appends the
    /// transaction to the log, and returns the created record.
    ///
    /// On any error, nothing is recorded.
    ///
    /// # Errors
    /// - Withdrawal exceeds the current balance, `LedgerError::InsufficientFunds`;
    /// - Amount is zero or negative, `LedgerError::NonPositiveAmount`.
    pub fn record_transaction(
        &self,
        amount: Decimal,
        kind: TxKind,
        description: Option<String>,
    ) -> Result<Tx, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(amount));
        }

        let mut log = self.log.lock();

        // Balance check and append must share one lock acquisition.
        if kind == TxKind::Withdrawal {
            let available = balance_of(&log);
            if available < amount {
                return Err(LedgerError::InsufficientFunds {
                    requested: amount,
                    available,
                });
            }
        }

        let tx = Tx {
            id: Uuid::new_v4(),
            amount,
            kind,
            description,
            timestamp: Utc::now(),
        };
        log.push(tx.clone());

        Ok(tx)
    }

    /// **Computes the current balance**
    ///
    /// The signed sum over a consistent snapshot of the log:
    /// deposits count positive, withdrawals negative.
    pub fn current_balance(&self) -> Decimal {
        balance_of(&self.log.lock())
    }

    /// **Fetches the transaction history, most recent first**
    ///
    /// Returns a snapshot copy; later appends don't affect it.
    ///
    /// Transactions with equal timestamps come out in descending insertion
    /// order, so the result is deterministic for a given log state.
    pub fn transaction_history(&self) -> Vec<Tx> {
        let log = self.log.lock();
        let mut history: Vec<Tx> = log.iter().rev().cloned().collect();
        drop(log);

        // The sort is stable, so ties keep the reversed insertion order.
        history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        history
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn balance_of(log: &[Tx]) -> Decimal {
    log.iter()
        .map(|tx| match tx.kind {
            TxKind::Deposit => tx.amount,
            TxKind::Withdrawal => -tx.amount,
        })
        .sum()
}
