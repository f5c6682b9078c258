
#[cfg(test)]
mod tests {
    use palisade_abi::{AbiValue, encode_call};
    use palisade_core::chain::{
        ChainError,
        account::Account,
        genesis::Genesis,
        native::{NativeContractRegistry, NativeDispatcher, permissions_contract},
        state::{AccountState, MemoryState, StateCache},
    };
    use palisade_crypto::Address;
    use palisade_permission::{AccountPermissions, PermFlag};

    /// Test chain: an in-memory state bootstrapped from a minimal genesis
    /// plus a dispatcher over the validated native contract registry.
    pub struct Testing {
        pub state: MemoryState,
        pub dispatcher: NativeDispatcher,
        pub contract_address: Address,
    }

    impl Testing {
        pub fn new() -> Self {
            let registry = NativeContractRegistry::new(vec![permissions_contract()])
                .expect("native registry must validate");
            let contract_address = registry
                .contract_by_name("Permissions")
                .expect("Permissions contract is registered")
                .address();
            let dispatcher = NativeDispatcher::new(registry);

            let mut state = MemoryState::new();
            let genesis = Genesis::new(
                "palisade-test".to_string(),
                "2016-01-01T00:00:00Z".to_string(),
                vec![],
                None,
            );
            genesis.apply(&mut state).expect("genesis applies");

            Testing {
                state,
                dispatcher,
                contract_address,
            }
        }

        /// A fresh account with every permission unset.
        pub fn create_account(&mut self, seed: u8) -> Address {
            let address = Address::left_pad(&[seed]);
            self.state
                .update_account(&Account::new(address, 0, AccountPermissions::default()))
                .expect("account update");
            address
        }

        pub fn grant(&mut self, address: &Address, flag: PermFlag) {
            let mut cache = StateCache::new(&mut self.state);
            cache
                .set_permission(address, flag, true)
                .expect("grant permission");
            cache.commit().expect("commit grant");
        }

        pub fn permissions_of(&self, address: &Address) -> AccountPermissions {
            self.state
                .get_account(address)
                .expect("state read")
                .expect("account exists")
                .permissions
        }

        /// Encodes and dispatches a call into the Permissions contract.
        pub fn call(
            &mut self,
            caller: &Address,
            function: &str,
            values: &[AbiValue],
            gas: &mut u64,
        ) -> Result<Vec<u8>, ChainError> {
            let selector = self
                .dispatcher
                .registry()
                .contract_by_name("Permissions")
                .expect("Permissions contract is registered")
                .function_by_name(function)
                .expect("function exists")
                .selector();
            let call_data = encode_call(selector, values);
            let contract_address = self.contract_address;
            self.dispatcher
                .dispatch(&mut self.state, &contract_address, caller, &call_data, gas)
        }
    }
}
