use std::collections::HashMap;
use std::collections::hash_map::Entry;

use palisade_crypto::Address;
use palisade_permission::{AccountPermissions, GLOBAL_PERMISSIONS_ADDRESS, PermFlag, RoleId};

use crate::chain::{ChainError, account::Account};

/// The narrow interface this layer consumes from the account store.
/// Persistence engines live behind it and are out of scope here.
pub trait AccountState {
    fn get_account(&self, address: &Address) -> Result<Option<Account>, ChainError>;
    fn update_account(&mut self, account: &Account) -> Result<(), ChainError>;
}

/// In-memory account store, used by genesis bootstrap and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    accounts: HashMap<Address, Account>,
}

impl MemoryState {
    pub fn new() -> Self {
        MemoryState::default()
    }
}

impl AccountState for MemoryState {
    fn get_account(&self, address: &Address) -> Result<Option<Account>, ChainError> {
        Ok(self.accounts.get(address).cloned())
    }

    fn update_account(&mut self, account: &Account) -> Result<(), ChainError> {
        self.accounts.insert(account.address, account.clone());
        Ok(())
    }
}

/// Mutable overlay owned by a single in-flight call. Reads fall through to
/// the backing state; writes land in the overlay and only reach the backing
/// state on `commit`. Dropping the cache discards every pending mutation,
/// which is how a failed dispatch rolls back.
///
/// Every mutating operation returns its error immediately; there is no
/// deferred error accumulator to poll after a batch.
pub struct StateCache<'a, S: AccountState> {
    backing: &'a mut S,
    dirty: HashMap<Address, Account>,
}

impl<'a, S: AccountState> StateCache<'a, S> {
    pub fn new(backing: &'a mut S) -> Self {
        StateCache {
            backing,
            dirty: HashMap::new(),
        }
    }

    pub fn get_account(&mut self, address: &Address) -> Result<Option<Account>, ChainError> {
        if let Some(account) = self.dirty.get(address) {
            return Ok(Some(account.clone()));
        }
        self.backing.get_account(address)
    }

    pub fn update_account(&mut self, account: &Account) -> Result<(), ChainError> {
        self.dirty.insert(account.address, account.clone());
        Ok(())
    }

    fn account_mut(&mut self, address: &Address) -> Result<&mut Account, ChainError> {
        match self.dirty.entry(*address) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let account = self
                    .backing
                    .get_account(address)?
                    .ok_or(ChainError::UnknownAccount(*address))?;
                Ok(entry.insert(account))
            }
        }
    }

    pub fn get_permissions(&mut self, address: &Address) -> Result<AccountPermissions, ChainError> {
        let account = self
            .get_account(address)?
            .ok_or(ChainError::UnknownAccount(*address))?;
        Ok(account.permissions)
    }

    /// Permissions of the fallback authority. Genesis always materializes
    /// the account at the reserved address, so a miss means corrupted state.
    pub fn global_permissions(&mut self) -> Result<AccountPermissions, ChainError> {
        self.get_account(&GLOBAL_PERMISSIONS_ADDRESS)?
            .map(|account| account.permissions)
            .ok_or_else(|| {
                ChainError::GenesisError("global permissions account is missing".to_string())
            })
    }

    pub fn set_permission(
        &mut self,
        address: &Address,
        flag: PermFlag,
        value: bool,
    ) -> Result<(), ChainError> {
        let account = self.account_mut(address)?;
        account.permissions.base.set(flag, value)?;
        Ok(())
    }

    pub fn unset_permission(&mut self, address: &Address, flag: PermFlag) -> Result<(), ChainError> {
        let account = self.account_mut(address)?;
        account.permissions.base.unset(flag)?;
        Ok(())
    }

    pub fn add_role(&mut self, address: &Address, role: RoleId) -> Result<bool, ChainError> {
        let account = self.account_mut(address)?;
        Ok(account.permissions.add_role(role))
    }

    pub fn remove_role(&mut self, address: &Address, role: RoleId) -> Result<bool, ChainError> {
        let account = self.account_mut(address)?;
        Ok(account.permissions.remove_role(role))
    }

    /// Writes every overlaid account into the backing state.
    pub fn commit(self) -> Result<(), ChainError> {
        for account in self.dirty.values() {
            self.backing.update_account(account)?;
        }
        Ok(())
    }
}
