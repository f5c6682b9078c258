use core::str;

use palisade_crypto::{Address, Word256, keccak256};
use palisade_permission::{AccountPermissions, GLOBAL_PERMISSIONS_ADDRESS};
use serde::{Deserialize, Serialize};
use spdlog::info;

use crate::chain::{
    ChainError,
    account::Account,
    state::AccountState,
    utils::chain_assert,
};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GenesisAccount {
    pub address: Address,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Explicit permissions are taken verbatim; accounts without one get
    /// the default template with every flag marked as set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<AccountPermissions>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Genesis {
    chain_name: String,
    genesis_time: String,
    accounts: Vec<GenesisAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    global_permissions: Option<AccountPermissions>,
}

impl Genesis {
    pub fn new(
        chain_name: String,
        genesis_time: String,
        accounts: Vec<GenesisAccount>,
        global_permissions: Option<AccountPermissions>,
    ) -> Self {
        Genesis {
            chain_name,
            genesis_time,
            accounts,
            global_permissions,
        }
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ChainError> {
        let genesis = str::from_utf8(bytes)
            .map_err(|_| ChainError::GenesisError("invalid UTF-8".to_string()))?;
        let genesis: Genesis = serde_json::from_str(genesis)
            .map_err(|e| ChainError::GenesisError(format!("{}", e)))?;
        genesis.validate()
    }

    pub fn validate(self) -> Result<Self, ChainError> {
        chain_assert(
            !self.chain_name.is_empty(),
            ChainError::GenesisError("chain name cannot be empty".to_string()),
        )?;
        for account in &self.accounts {
            chain_assert(
                account.address != GLOBAL_PERMISSIONS_ADDRESS,
                ChainError::GenesisError(format!(
                    "account address {} is reserved for the global permissions",
                    account.address
                )),
            )?;
        }
        let mut seen = std::collections::HashSet::new();
        for account in &self.accounts {
            chain_assert(
                seen.insert(account.address),
                ChainError::GenesisError(format!("duplicate account address {}", account.address)),
            )?;
        }
        Ok(self)
    }

    /// Hash of the canonical JSON encoding; identifies the chain for
    /// introspection surfaces.
    pub fn compute_chain_id(&self) -> Result<Word256, ChainError> {
        let encoded = serde_json::to_vec(self)
            .map_err(|e| ChainError::GenesisError(format!("failed to encode genesis: {}", e)))?;
        Ok(keccak256(&encoded))
    }

    /// Materializes the genesis accounts and the global-permissions account
    /// at the reserved address. Re-checks the reserved address so a document
    /// built in code, without going through `parse`, cannot overwrite the
    /// fallback authority.
    pub fn apply<S: AccountState>(&self, state: &mut S) -> Result<(), ChainError> {
        for account in &self.accounts {
            chain_assert(
                account.address != GLOBAL_PERMISSIONS_ADDRESS,
                ChainError::GenesisError(format!(
                    "account address {} is reserved for the global permissions",
                    account.address
                )),
            )?;
        }

        let global = self
            .global_permissions
            .clone()
            .unwrap_or_else(AccountPermissions::default_account);
        state.update_account(&Account::new(GLOBAL_PERMISSIONS_ADDRESS, 0, global))?;

        for genesis_account in &self.accounts {
            let permissions = genesis_account
                .permissions
                .clone()
                .unwrap_or_else(AccountPermissions::default_account);
            state.update_account(&Account::new(
                genesis_account.address,
                genesis_account.amount,
                permissions,
            ))?;
        }

        info!(
            "genesis applied: chain {} with {} accounts",
            self.chain_name,
            self.accounts.len()
        );
        Ok(())
    }

    pub fn chain_name(&self) -> &str {
        &self.chain_name
    }

    pub fn genesis_time(&self) -> &str {
        &self.genesis_time
    }

    pub fn accounts(&self) -> &[GenesisAccount] {
        &self.accounts
    }
}
