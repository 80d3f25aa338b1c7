//! Trait interfaces between the ledger and its environment.
//!
//! These traits define the two collaborator seams of the ledger:
//! - [`PaymentGateway`] — moves real value out of the pool on withdrawal
//! - [`RewardAuthorizer`] — decides who may inject rewards
//!
//! Stock implementations live in [`payment`](crate::payment) and
//! [`auth`](crate::auth); hosts provide their own to plug in real
//! transfers or bespoke authorization policies.

use crate::error::PaymentError;
use crate::types::AccountId;

/// Outbound value transfer, invoked only inside `withdraw`.
///
/// The ledger calls [`pay`](Self::pay) before committing any state, so a
/// failed transfer leaves the ledger untouched. Implementations must not
/// call back into the ledger: the call happens under the host's operation
/// lock.
pub trait PaymentGateway: Send + Sync {
    /// Transfer `amount` to `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`PaymentError`] when the transfer cannot be completed;
    /// the ledger propagates it verbatim and rolls the withdrawal back.
    fn pay(&self, to: &AccountId, amount: u64) -> Result<(), PaymentError>;
}

/// Authorization policy for reward injection.
///
/// Replaces a hardcoded owner field: the ledger asks the policy on every
/// `deposit_reward` call, so owners can rotate or multiple injectors can
/// be authorized without touching ledger state.
pub trait RewardAuthorizer: Send + Sync {
    /// Whether `account` may deposit rewards right now.
    fn can_deposit_rewards(&self, account: &AccountId) -> bool;
}
