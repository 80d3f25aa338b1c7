//! Ledger event notifications.
//!
//! [`PoolLedger`](crate::ledger::PoolLedger) appends events to an internal
//! log as operations commit; hosts drain the log (see
//! [`take_events`](crate::ledger::PoolLedger::take_events)) and fan events
//! out to subscribers. Reward injections do not produce an event — only
//! the aggregate totals change.

use serde::{Deserialize, Serialize};

use crate::types::AccountId;

/// A committed ledger state change, in commit order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum PoolEvent {
    /// A caller deposited into the pool. Recorded even for a zero amount.
    Deposited {
        /// The depositing caller.
        account: AccountId,
        /// The deposited amount.
        amount: u64,
    },
    /// A caller withdrew their full entitlement.
    Withdrawn {
        /// The withdrawing caller.
        account: AccountId,
        /// The paid-out amount: principal plus all accrued rewards.
        amount: u64,
    },
}

impl PoolEvent {
    /// The account the event concerns.
    pub fn account(&self) -> &AccountId {
        match self {
            Self::Deposited { account, .. } | Self::Withdrawn { account, .. } => account,
        }
    }

    /// The amount the event carries.
    pub fn amount(&self) -> u64 {
        match self {
            Self::Deposited { amount, .. } | Self::Withdrawn { amount, .. } => *amount,
        }
    }
}
