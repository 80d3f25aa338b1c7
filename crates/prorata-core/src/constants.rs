//! Ledger constants. All monetary values are unsigned integers in the
//! pool's smallest unit.

/// Fixed-point scale of the cumulative reward index.
///
/// `reward_per_deposit` stores hundredths of a reward unit per unit of
/// deposit: an injection adds `amount * REWARD_SCALE / total_deposited`
/// to the index, and a depositor's pending reward is
/// `principal * (index - checkpoint) / REWARD_SCALE`. Two decimal digits
/// keep small injections into large pools from truncating straight to
/// zero while leaving all arithmetic in u64/u128 integers.
pub const REWARD_SCALE: u64 = 100;
