//! Stock authorization policies for reward injection.
//!
//! Both policies implement [`RewardAuthorizer`] and are safe to share
//! across threads; membership changes take effect on the next
//! `deposit_reward` call.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::error::LedgerError;
use crate::traits::RewardAuthorizer;
use crate::types::AccountId;

/// Single-owner policy with rotating ownership.
///
/// Exactly one account may deposit rewards at a time. The current owner
/// may hand the role to another account via [`transfer`](Self::transfer).
pub struct OwnerAuthorizer {
    owner: RwLock<AccountId>,
}

impl OwnerAuthorizer {
    /// Create a policy owned by `owner`.
    pub fn new(owner: AccountId) -> Self {
        Self { owner: RwLock::new(owner) }
    }

    /// The current owner.
    pub fn owner(&self) -> AccountId {
        *self.owner.read()
    }

    /// Transfer ownership from `caller` to `new_owner`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Unauthorized`] when `caller` is not the
    /// current owner; ownership is unchanged.
    pub fn transfer(&self, caller: &AccountId, new_owner: AccountId) -> Result<(), LedgerError> {
        let mut owner = self.owner.write();
        if *caller != *owner {
            return Err(LedgerError::Unauthorized);
        }
        *owner = new_owner;
        Ok(())
    }
}

impl RewardAuthorizer for OwnerAuthorizer {
    fn can_deposit_rewards(&self, account: &AccountId) -> bool {
        *account == *self.owner.read()
    }
}

impl std::fmt::Debug for OwnerAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerAuthorizer")
            .field("owner", &self.owner.read().to_string())
            .finish()
    }
}

/// Allow-list policy: any member may deposit rewards.
///
/// Starts empty; grant at least one member before injecting rewards, or
/// every `deposit_reward` call fails `Unauthorized`.
#[derive(Default)]
pub struct AllowListAuthorizer {
    members: RwLock<HashSet<AccountId>>,
}

impl AllowListAuthorizer {
    /// Create an empty allow list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allow list seeded with `members`.
    pub fn with_members(members: impl IntoIterator<Item = AccountId>) -> Self {
        Self {
            members: RwLock::new(members.into_iter().collect()),
        }
    }

    /// Authorize `account`. Returns `false` if it was already a member.
    pub fn grant(&self, account: AccountId) -> bool {
        self.members.write().insert(account)
    }

    /// Remove `account`. Returns `false` if it was not a member.
    pub fn revoke(&self, account: &AccountId) -> bool {
        self.members.write().remove(account)
    }

    /// Whether `account` is currently a member.
    pub fn contains(&self, account: &AccountId) -> bool {
        self.members.read().contains(account)
    }

    /// Number of current members.
    pub fn len(&self) -> usize {
        self.members.read().len()
    }

    /// Whether the list has no members.
    pub fn is_empty(&self) -> bool {
        self.members.read().is_empty()
    }
}

impl RewardAuthorizer for AllowListAuthorizer {
    fn can_deposit_rewards(&self, account: &AccountId) -> bool {
        self.members.read().contains(account)
    }
}

impl std::fmt::Debug for AllowListAuthorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllowListAuthorizer")
            .field("members", &self.members.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acct(seed: u8) -> AccountId {
        AccountId([seed; 32])
    }

    // --- OwnerAuthorizer ---

    #[test]
    fn owner_is_authorized() {
        let auth = OwnerAuthorizer::new(acct(1));
        assert!(auth.can_deposit_rewards(&acct(1)));
        assert!(!auth.can_deposit_rewards(&acct(2)));
    }

    #[test]
    fn owner_accessor() {
        let auth = OwnerAuthorizer::new(acct(1));
        assert_eq!(auth.owner(), acct(1));
    }

    #[test]
    fn owner_transfer_rotates_authorization() {
        let auth = OwnerAuthorizer::new(acct(1));
        auth.transfer(&acct(1), acct(2)).unwrap();

        assert_eq!(auth.owner(), acct(2));
        assert!(!auth.can_deposit_rewards(&acct(1)));
        assert!(auth.can_deposit_rewards(&acct(2)));
    }

    #[test]
    fn transfer_by_non_owner_rejected() {
        let auth = OwnerAuthorizer::new(acct(1));
        let err = auth.transfer(&acct(3), acct(3)).unwrap_err();
        assert_eq!(err, LedgerError::Unauthorized);
        assert_eq!(auth.owner(), acct(1));
    }

    #[test]
    fn transfer_to_self_is_allowed() {
        let auth = OwnerAuthorizer::new(acct(1));
        auth.transfer(&acct(1), acct(1)).unwrap();
        assert_eq!(auth.owner(), acct(1));
    }

    // --- AllowListAuthorizer ---

    #[test]
    fn empty_list_authorizes_nobody() {
        let auth = AllowListAuthorizer::new();
        assert!(auth.is_empty());
        assert!(!auth.can_deposit_rewards(&acct(1)));
    }

    #[test]
    fn granted_member_is_authorized() {
        let auth = AllowListAuthorizer::new();
        assert!(auth.grant(acct(1)));
        assert!(!auth.is_empty());
        assert!(auth.can_deposit_rewards(&acct(1)));
        assert!(!auth.can_deposit_rewards(&acct(2)));
    }

    #[test]
    fn grant_twice_reports_existing() {
        let auth = AllowListAuthorizer::new();
        assert!(auth.grant(acct(1)));
        assert!(!auth.grant(acct(1)));
        assert_eq!(auth.len(), 1);
    }

    #[test]
    fn revoked_member_loses_authorization() {
        let auth = AllowListAuthorizer::with_members([acct(1), acct(2)]);
        assert_eq!(auth.len(), 2);

        assert!(auth.revoke(&acct(1)));
        assert!(!auth.can_deposit_rewards(&acct(1)));
        assert!(auth.can_deposit_rewards(&acct(2)));
    }

    #[test]
    fn revoke_unknown_reports_missing() {
        let auth = AllowListAuthorizer::new();
        assert!(!auth.revoke(&acct(9)));
    }

    #[test]
    fn with_members_deduplicates() {
        let auth = AllowListAuthorizer::with_members([acct(1), acct(1), acct(2)]);
        assert_eq!(auth.len(), 2);
        assert!(auth.contains(&acct(1)));
        assert!(auth.contains(&acct(2)));
    }

    #[test]
    fn both_policies_usable_as_dyn() {
        let owner: Box<dyn RewardAuthorizer> = Box::new(OwnerAuthorizer::new(acct(1)));
        let list: Box<dyn RewardAuthorizer> = Box::new(AllowListAuthorizer::with_members([acct(2)]));
        assert!(owner.can_deposit_rewards(&acct(1)));
        assert!(list.can_deposit_rewards(&acct(2)));
    }
}
