use serde::{Deserialize, Serialize};

use crate::{BasePermissions, PermFlag, RoleId};

/// Base permissions plus an insertion-ordered, duplicate-free role set.
/// Owned one-to-one by an account.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountPermissions {
    pub base: BasePermissions,
    #[serde(default)]
    pub roles: Vec<RoleId>,
}

impl AccountPermissions {
    pub fn new(base: BasePermissions) -> Self {
        AccountPermissions {
            base,
            roles: Vec::new(),
        }
    }

    /// Template applied to accounts materialized from genesis without an
    /// explicit permissions object: every default base permission granted
    /// and every defined flag marked as explicitly set.
    pub fn default_account() -> Self {
        AccountPermissions {
            base: BasePermissions::new(PermFlag::DEFAULT_BASE_PERM_FLAGS, PermFlag::ALL_PERM_FLAGS),
            roles: Vec::new(),
        }
    }

    pub fn has_role(&self, role: RoleId) -> bool {
        self.roles.contains(&role)
    }

    /// Returns whether the role was newly added.
    pub fn add_role(&mut self, role: RoleId) -> bool {
        if self.roles.contains(&role) {
            return false;
        }
        self.roles.push(role);
        true
    }

    /// Removes one matching entry, preserving the relative order of the
    /// remainder. Returns whether a matching entry existed.
    pub fn remove_role(&mut self, role: RoleId) -> bool {
        match self.roles.iter().position(|r| *r == role) {
            Some(index) => {
                self.roles.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> RoleId {
        name.parse().unwrap()
    }

    #[test]
    fn test_add_role_idempotent() {
        let mut perms = AccountPermissions::default();
        assert!(perms.add_role(role("validator")));
        assert!(!perms.add_role(role("validator")));
        assert_eq!(perms.roles.len(), 1);
    }

    #[test]
    fn test_remove_absent_role() {
        let mut perms = AccountPermissions::default();
        perms.add_role(role("a"));
        assert!(!perms.remove_role(role("b")));
        assert_eq!(perms.roles.len(), 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut perms = AccountPermissions::default();
        for name in ["a", "b", "c", "d"] {
            perms.add_role(role(name));
        }
        assert!(perms.remove_role(role("b")));
        assert_eq!(perms.roles, vec![role("a"), role("c"), role("d")]);
        assert!(!perms.has_role(role("b")));
    }

    #[test]
    fn test_default_account_template() {
        let perms = AccountPermissions::default_account();
        assert_eq!(perms.base.get(PermFlag::SEND), Ok(true));
        assert_eq!(perms.base.get(PermFlag::ROOT), Ok(false));
        assert!(perms.base.is_set(PermFlag::ADD_ROLE));
        assert!(perms.roles.is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let mut perms = AccountPermissions::default_account();
        perms.add_role(role("oracle"));
        let json = serde_json::to_value(&perms).unwrap();
        assert_eq!(json["base"]["perms"], PermFlag::DEFAULT_BASE_PERM_FLAGS.0);
        assert_eq!(json["roles"][0], "oracle");
        let back: AccountPermissions = serde_json::from_value(json).unwrap();
        assert_eq!(back, perms);
    }
}
