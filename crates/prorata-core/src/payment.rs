//! In-memory payment gateway.
//!
//! [`MemoryGateway`] credits withdrawals to an internal balance map and
//! is the stock [`PaymentGateway`] for tests and single-process
//! deployments. A gateway built with [`rejecting`](MemoryGateway::rejecting)
//! fails every payment, which drives the withdraw rollback path.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::PaymentError;
use crate::traits::PaymentGateway;
use crate::types::AccountId;

/// Payment gateway backed by an in-memory balance map.
#[derive(Default)]
pub struct MemoryGateway {
    balances: Mutex<HashMap<AccountId, u64>>,
    reject_reason: Option<String>,
}

impl MemoryGateway {
    /// Create a gateway that accepts every payment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway that rejects every payment with `reason`.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            balances: Mutex::new(HashMap::new()),
            reject_reason: Some(reason.into()),
        }
    }

    /// Total credited to `account` so far.
    pub fn balance_of(&self, account: &AccountId) -> u64 {
        self.balances.lock().get(account).copied().unwrap_or(0)
    }

    /// Sum of all payments made through this gateway.
    pub fn total_paid(&self) -> u64 {
        self.balances.lock().values().sum()
    }

    /// Number of accounts that have received at least one payment.
    pub fn recipient_count(&self) -> usize {
        self.balances.lock().len()
    }
}

impl PaymentGateway for MemoryGateway {
    fn pay(&self, to: &AccountId, amount: u64) -> Result<(), PaymentError> {
        if let Some(reason) = &self.reject_reason {
            return Err(PaymentError::Rejected(reason.clone()));
        }
        let mut balances = self.balances.lock();
        let balance = balances.entry(*to).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| PaymentError::Rejected("recipient balance overflow".into()))?;
        Ok(())
    }
}

impl std::fmt::Debug for MemoryGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGateway")
            .field("recipients", &self.balances.lock().len())
            .field("rejecting", &self.reject_reason.is_some())
            .finish()
    }
}
