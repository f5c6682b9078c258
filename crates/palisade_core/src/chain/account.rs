use palisade_crypto::Address;
use palisade_permission::AccountPermissions;
use serde::{Deserialize, Serialize};

/// A chain account. Accounts start with every permission unset unless they
/// were materialized from the genesis default template; their permissions
/// are owned one-to-one and destroyed with the account.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    pub address: Address,
    pub balance: u64,
    pub sequence: u64,
    pub permissions: AccountPermissions,
}

impl Account {
    pub fn new(address: Address, balance: u64, permissions: AccountPermissions) -> Self {
        Account {
            address,
            balance,
            sequence: 0,
            permissions,
        }
    }
}
