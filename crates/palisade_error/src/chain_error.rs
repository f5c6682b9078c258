use palisade_abi::{AbiError, FunctionSelector};
use palisade_crypto::Address;
use palisade_permission::{PermFlag, PermissionError};
use thiserror::Error;

/// Every failure a call into the permission layer can surface. Failures
/// raised during dispatch are local to the call: the call's state effects
/// are rolled back, the enclosing transaction's other calls are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("invalid permission flag {0}")]
    InvalidPermission(PermFlag),
    #[error("account {address} does not have permission {permission}")]
    LacksPermission {
        address: Address,
        permission: PermFlag,
    },
    #[error("no contract registered at address {0}")]
    UnknownContract(Address),
    #[error("contract has no function with selector {0}")]
    UnknownFunction(FunctionSelector),
    #[error("unknown account {0}")]
    UnknownAccount(Address),
    #[error("failed to decode call data: {0}")]
    AbiDecodeError(#[from] AbiError),
    #[error("insufficient gas: {required} required, {remaining} remaining")]
    OutOfGas { required: u64, remaining: u64 },
    #[error("invalid role identifier: {0}")]
    InvalidRole(String),
    #[error("native contract registration error: {0}")]
    RegistrationError(String),
    #[error("genesis error: {0}")]
    GenesisError(String),
    #[error("parse error: {0}")]
    ParseError(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<PermissionError> for ChainError {
    fn from(e: PermissionError) -> Self {
        match e {
            PermissionError::InvalidPermission(flag) => ChainError::InvalidPermission(flag),
            // Resolution handles this in place; reaching here is a bug.
            PermissionError::ValueNotSet(flag) => {
                ChainError::InternalError(format!("unset permission {} escaped resolution", flag))
            }
            PermissionError::RoleTooLong(role) => ChainError::InvalidRole(role),
            other => ChainError::ParseError(other.to_string()),
        }
    }
}
