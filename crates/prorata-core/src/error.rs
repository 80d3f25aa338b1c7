//! Error types for the Prorata ledger.
use thiserror::Error;

/// Failures reported by the payment collaborator.
///
/// Produced by [`PaymentGateway`](crate::traits::PaymentGateway)
/// implementations and carried through the ledger unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    #[error("payment rejected: {0}")] Rejected(String),
    #[error("payment backend unavailable")] Unavailable,
}

/// Failures reported by ledger operations.
///
/// Every variant is returned before any state mutation: a failed
/// operation leaves the ledger exactly as it found it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("unauthorized: caller may not deposit rewards")] Unauthorized,
    #[error("insufficient balance: caller has no active deposit")] InsufficientBalance,
    #[error("no depositors: reward cannot be distributed into an empty pool")] NoDepositors,
    #[error("amount overflow")] AmountOverflow,
    #[error(transparent)] Payment(#[from] PaymentError),
}
