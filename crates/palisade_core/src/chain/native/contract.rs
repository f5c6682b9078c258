use std::collections::{HashMap, HashSet};

use palisade_abi::{AbiType, FunctionSelector, signature};
use palisade_crypto::{Address, keccak256};
use spdlog::info;

use crate::chain::{ChainError, permission::PermFlag};

/// Tags the native logic behind a registered function. A closed set so the
/// dispatcher matches exhaustively instead of calling through an opaque
/// handler table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeFunctionKind {
    AddRole,
    RemoveRole,
    HasRole,
    SetBase,
    UnsetBase,
    HasBase,
    SetGlobal,
}

/// Description of one natively-implemented contract function: its canonical
/// ABI shape, the permission the caller must hold, and its gas cost.
#[derive(Clone, Debug)]
pub struct NativeFunction {
    name: &'static str,
    arguments: Vec<AbiType>,
    permission: PermFlag,
    gas_cost: u64,
    kind: NativeFunctionKind,
}

impl NativeFunction {
    pub fn new(
        name: &'static str,
        arguments: Vec<AbiType>,
        permission: PermFlag,
        gas_cost: u64,
        kind: NativeFunctionKind,
    ) -> Self {
        NativeFunction {
            name,
            arguments,
            permission,
            gas_cost,
            kind,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arguments(&self) -> &[AbiType] {
        &self.arguments
    }

    pub fn permission(&self) -> PermFlag {
        self.permission
    }

    pub fn gas_cost(&self) -> u64 {
        self.gas_cost
    }

    pub fn kind(&self) -> NativeFunctionKind {
        self.kind
    }

    /// Canonical `name(type,...)` string, the selector preimage.
    pub fn signature(&self) -> String {
        signature(self.name, &self.arguments)
    }

    pub fn selector(&self) -> FunctionSelector {
        FunctionSelector::from_signature(&self.signature())
    }
}

/// A natively-implemented contract: built-in logic addressable and callable
/// exactly like a bytecode contract.
#[derive(Clone, Debug)]
pub struct NativeContract {
    name: String,
    comment: String,
    functions: Vec<NativeFunction>,
}

impl NativeContract {
    pub fn new(comment: &str, name: &str, functions: Vec<NativeFunction>) -> Self {
        NativeContract {
            name: name.to_string(),
            comment: comment.to_string(),
            functions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn functions(&self) -> &[NativeFunction] {
        &self.functions
    }

    /// The contract's on-chain address: the last 20 bytes of the Keccak-256
    /// hash of its name, so native contracts are indistinguishable at the
    /// address level from bytecode contracts.
    pub fn address(&self) -> Address {
        let hash = keccak256(self.name.as_bytes());
        let mut out = [0u8; 20];
        out.copy_from_slice(&hash.as_bytes()[12..]);
        Address::new(out)
    }

    pub fn function_by_selector(
        &self,
        selector: &FunctionSelector,
    ) -> Result<&NativeFunction, ChainError> {
        self.functions
            .iter()
            .find(|f| f.selector() == *selector)
            .ok_or(ChainError::UnknownFunction(*selector))
    }

    pub fn function_by_name(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// The fixed table of native contracts. Constructed and validated once at
/// startup, injected into the dispatcher, and read-only for the process
/// lifetime.
#[derive(Clone, Debug)]
pub struct NativeContractRegistry {
    contracts: Vec<NativeContract>,
    by_address: HashMap<Address, usize>,
}

impl NativeContractRegistry {
    /// Fails fast on a duplicate function selector within a contract or a
    /// derived-address collision between contracts; no dispatch may run
    /// against an unvalidated table.
    pub fn new(contracts: Vec<NativeContract>) -> Result<Self, ChainError> {
        let mut by_address = HashMap::new();
        for (index, contract) in contracts.iter().enumerate() {
            let mut selectors = HashSet::new();
            for function in contract.functions() {
                if !selectors.insert(function.selector()) {
                    return Err(ChainError::RegistrationError(format!(
                        "contract {} has duplicate selector {} for function {}",
                        contract.name(),
                        function.selector(),
                        function.name(),
                    )));
                }
            }
            let address = contract.address();
            if by_address.insert(address, index).is_some() {
                return Err(ChainError::RegistrationError(format!(
                    "contract {} derives address {} which is already registered",
                    contract.name(),
                    address,
                )));
            }
            info!(
                "registered native contract {} at address {}",
                contract.name(),
                address
            );
        }
        Ok(NativeContractRegistry {
            contracts,
            by_address,
        })
    }

    pub fn contract_by_address(&self, address: &Address) -> Option<&NativeContract> {
        self.by_address
            .get(address)
            .map(|index| &self.contracts[*index])
    }

    pub fn contract_by_name(&self, name: &str) -> Option<&NativeContract> {
        self.contracts.iter().find(|c| c.name() == name)
    }

    pub fn is_registered(&self, address: &Address) -> bool {
        self.by_address.contains_key(address)
    }

    pub fn contracts(&self) -> &[NativeContract] {
        &self.contracts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{config, native::permissions_contract};

    #[test]
    fn test_address_derivation() {
        let contract = NativeContract::new("A comment", "CoolButVeryLongNamedContractOfDoom", vec![]);
        let hash = keccak256("CoolButVeryLongNamedContractOfDoom");
        assert_eq!(contract.address().as_ref(), &hash.as_bytes()[12..]);
    }

    #[test]
    fn test_duplicate_selector_rejected() {
        // Two functions with identical signatures collide trivially; the
        // registry must refuse the table before any dispatch happens.
        let contract = NativeContract::new(
            "broken",
            "Broken",
            vec![
                NativeFunction::new(
                    "hasBase",
                    vec![AbiType::Address, AbiType::Uint64],
                    PermFlag::HAS_BASE,
                    config::GAS_NATIVE_BASE,
                    NativeFunctionKind::HasBase,
                ),
                NativeFunction::new(
                    "hasBase",
                    vec![AbiType::Address, AbiType::Uint64],
                    PermFlag::HAS_BASE,
                    config::GAS_NATIVE_BASE,
                    NativeFunctionKind::HasBase,
                ),
            ],
        );
        assert!(matches!(
            NativeContractRegistry::new(vec![contract]),
            Err(ChainError::RegistrationError(_))
        ));
    }

    #[test]
    fn test_duplicate_address_rejected() {
        let a = permissions_contract();
        let b = permissions_contract();
        assert!(matches!(
            NativeContractRegistry::new(vec![a, b]),
            Err(ChainError::RegistrationError(_))
        ));
    }

    #[test]
    fn test_lookup_by_name_and_address() {
        let registry = NativeContractRegistry::new(vec![permissions_contract()]).unwrap();
        let contract = registry.contract_by_name("Permissions").unwrap();
        assert!(registry.is_registered(&contract.address()));
        assert!(registry.contract_by_name("Treasury").is_none());
    }
}
