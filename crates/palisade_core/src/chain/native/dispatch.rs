use palisade_abi::{decode_arguments, encode_bool, split_selector};
use palisade_crypto::Address;
use spdlog::debug;

use crate::chain::{
    ChainError,
    authorization_manager::AuthorizationManager,
    native::{
        contract::{NativeContract, NativeContractRegistry},
        permissions_contract::{
            self, PermissionsCall,
        },
    },
    state::{AccountState, StateCache},
};

/// Runs native contract calls: decode, authorize, execute, encode, with gas
/// accounting. Each dispatch is atomic over a fresh state overlay; the
/// overlay is only committed when the whole pipeline succeeds.
pub struct NativeDispatcher {
    registry: NativeContractRegistry,
}

impl NativeDispatcher {
    pub fn new(registry: NativeContractRegistry) -> Self {
        NativeDispatcher { registry }
    }

    pub fn registry(&self) -> &NativeContractRegistry {
        &self.registry
    }

    /// Dispatches `call_data` from `caller` to the native contract at
    /// `contract_address`. On success returns the ABI-encoded return value;
    /// on any failure every state mutation attempted by this call is
    /// discarded and `gas` reflects what the failed call consumed.
    pub fn dispatch<S: AccountState>(
        &self,
        state: &mut S,
        contract_address: &Address,
        caller: &Address,
        call_data: &[u8],
        gas: &mut u64,
    ) -> Result<Vec<u8>, ChainError> {
        let contract = self
            .registry
            .contract_by_address(contract_address)
            .ok_or(ChainError::UnknownContract(*contract_address))?;

        let mut cache = StateCache::new(state);
        let ret = Self::run(contract, &mut cache, caller, call_data, gas)?;
        cache.commit()?;
        Ok(ret)
    }

    fn run<S: AccountState>(
        contract: &NativeContract,
        cache: &mut StateCache<S>,
        caller: &Address,
        call_data: &[u8],
        gas: &mut u64,
    ) -> Result<Vec<u8>, ChainError> {
        let (selector, arg_data) = split_selector(call_data)?;
        let function = contract.function_by_selector(&selector)?;
        let values = decode_arguments(function.arguments(), arg_data)?;

        AuthorizationManager::require_permission(cache, caller, function.permission())?;

        let cost = function.gas_cost();
        if *gas < cost {
            let remaining = *gas;
            *gas = 0;
            return Err(ChainError::OutOfGas {
                required: cost,
                remaining,
            });
        }
        *gas -= cost;

        debug!(
            "native call {}.{} from {}",
            contract.name(),
            function.signature(),
            caller
        );

        let call = PermissionsCall::from_values(function.kind(), &values)?;
        let result = match &call {
            PermissionsCall::AddRole(call) => permissions_contract::add_role(cache, call)?,
            PermissionsCall::RemoveRole(call) => permissions_contract::remove_role(cache, call)?,
            PermissionsCall::HasRole(call) => permissions_contract::has_role(cache, call)?,
            PermissionsCall::SetBase(call) => permissions_contract::set_base(cache, call)?,
            PermissionsCall::UnsetBase(call) => permissions_contract::unset_base(cache, call)?,
            PermissionsCall::HasBase(call) => permissions_contract::has_base(cache, call)?,
            PermissionsCall::SetGlobal(call) => permissions_contract::set_global(cache, call)?,
        };

        Ok(encode_bool(result))
    }
}
