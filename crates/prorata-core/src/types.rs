//! Core ledger types: account identities and depositor records.
//!
//! All monetary quantities are unsigned integers in the pool's smallest
//! unit. The ledger never interprets amounts beyond addition, subtraction,
//! and the fixed-point accrual arithmetic in [`accrual`](crate::accrual).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte caller identity.
///
/// Opaque to the ledger: it is only ever compared, hashed, and handed to
/// the payment gateway as a destination. How identities are derived
/// (key hashes, service-assigned ids) is the host's concern.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    /// The zero identity (32 zero bytes).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create an AccountId from a byte array.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check if this is the zero identity.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<[u8; 32]> for AccountId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Per-depositor ledger record.
///
/// Created implicitly on a caller's first deposit and retained with all
/// fields zeroed after a full withdrawal, so a later re-deposit reuses the
/// same record.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DepositorAccount {
    /// The depositor's own contributed amount, returned in full on withdrawal.
    pub principal: u64,
    /// Checkpoint of the cumulative reward index at the last
    /// balance-affecting event. Accrual since is
    /// `principal * (current_index - reward_debt) / REWARD_SCALE`.
    pub reward_debt: u64,
    /// Rewards settled out of the index mechanism on a repeat deposit,
    /// payable alongside principal on withdrawal.
    pub settled_rewards: u64,
}

impl DepositorAccount {
    /// Whether this record holds a live deposit.
    pub fn is_active(&self) -> bool {
        self.principal > 0
    }
}
