use palisade_crypto::Address;
use palisade_permission::{PermFlag, PermissionError};

use crate::chain::{
    ChainError,
    state::{AccountState, StateCache},
};

/// The permission resolver. Every privileged operation routes through it
/// with the flag naming the operation: value transfer, contract and account
/// creation, validator bonding, naming, and all native administrative
/// functions.
pub struct AuthorizationManager;

impl AuthorizationManager {
    /// Resolves whether `address` holds `flag`: the account's own record
    /// wins if the flag is explicitly set there, otherwise the global
    /// permissions are consulted, otherwise the answer is false. Absence of
    /// an explicit grant anywhere denies the action.
    pub fn has_permission<S: AccountState>(
        state: &mut StateCache<S>,
        address: &Address,
        flag: PermFlag,
    ) -> Result<bool, ChainError> {
        if !flag.is_valid() {
            return Err(ChainError::InvalidPermission(flag));
        }
        let permissions = state.get_permissions(address)?;
        match permissions.base.get(flag) {
            Ok(value) => Ok(value),
            Err(PermissionError::ValueNotSet(_)) => {
                let global = state.global_permissions()?;
                match global.base.get(flag) {
                    Ok(value) => Ok(value),
                    Err(PermissionError::ValueNotSet(_)) => Ok(false),
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn require_permission<S: AccountState>(
        state: &mut StateCache<S>,
        address: &Address,
        flag: PermFlag,
    ) -> Result<(), ChainError> {
        if Self::has_permission(state, address, flag)? {
            Ok(())
        } else {
            Err(ChainError::LacksPermission {
                address: *address,
                permission: flag,
            })
        }
    }
}
