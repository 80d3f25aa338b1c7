//! Fixed-point reward accrual arithmetic.
//!
//! The ledger distributes rewards through a cumulative index rather than
//! per-depositor iteration: each injection advances `reward_per_deposit`
//! by the injected amount per unit of deposit, scaled by
//! [`REWARD_SCALE`](crate::constants::REWARD_SCALE), and each depositor
//! carries a checkpoint of the index from their last balance-affecting
//! event. A depositor's pending reward is then
//! `principal * (index - checkpoint) / REWARD_SCALE`, computable in O(1)
//! regardless of pool size.
//!
//! Both divisions truncate toward zero. The truncated remainder of an
//! injection is forfeited from per-unit accounting; this lossiness is part
//! of the accounting model, asserted by tests, and bounded by one unit per
//! depositor per injection.
//!
//! All intermediate products are u128 so that u64 inputs cannot overflow
//! mid-computation; results that do not fit back into u64 fail with
//! [`LedgerError::AmountOverflow`].

use crate::constants::REWARD_SCALE;
use crate::error::LedgerError;

/// Index advance for injecting `amount` into a pool holding
/// `total_deposited`.
///
/// Computes `amount * REWARD_SCALE / total_deposited`, truncating.
///
/// # Errors
///
/// Returns [`LedgerError::NoDepositors`] when `total_deposited` is zero
/// (the advance has no denominator) and [`LedgerError::AmountOverflow`]
/// when the scaled quotient exceeds `u64::MAX`.
pub fn index_increment(amount: u64, total_deposited: u64) -> Result<u64, LedgerError> {
    if total_deposited == 0 {
        return Err(LedgerError::NoDepositors);
    }
    let scaled = (amount as u128) * (REWARD_SCALE as u128) / (total_deposited as u128);
    u64::try_from(scaled).map_err(|_| LedgerError::AmountOverflow)
}

/// Reward accrued by `principal` between the `reward_debt` checkpoint and
/// the current `reward_per_deposit` index.
///
/// Computes `principal * (reward_per_deposit - reward_debt) /
/// REWARD_SCALE`, truncating. A checkpoint ahead of the index (impossible
/// through ledger operations, since the index never decreases and
/// checkpoints are always set to a past index value) is treated as fully
/// settled and yields zero.
///
/// # Errors
///
/// Returns [`LedgerError::AmountOverflow`] when the accrued amount
/// exceeds `u64::MAX`.
pub fn pending_reward(
    principal: u64,
    reward_per_deposit: u64,
    reward_debt: u64,
) -> Result<u64, LedgerError> {
    let delta = reward_per_deposit.saturating_sub(reward_debt);
    let accrued = (principal as u128) * (delta as u128) / (REWARD_SCALE as u128);
    u64::try_from(accrued).map_err(|_| LedgerError::AmountOverflow)
}
