use palisade_abi::{AbiError, AbiType, AbiValue};
use palisade_crypto::Address;
use palisade_permission::{GLOBAL_PERMISSIONS_ADDRESS, PermFlag, RoleId};

use crate::chain::{
    ChainError,
    authorization_manager::AuthorizationManager,
    config,
    native::contract::{NativeContract, NativeFunction, NativeFunctionKind},
    state::{AccountState, StateCache},
    utils::chain_assert,
};

/// The Permissions native contract: the only write path into permission
/// state apart from genesis.
pub fn permissions_contract() -> NativeContract {
    NativeContract::new(
        "Manages base permissions and roles of accounts, and the global permission fallback",
        "Permissions",
        vec![
            NativeFunction::new(
                "addRole",
                vec![AbiType::Address, AbiType::String],
                PermFlag::ADD_ROLE,
                config::GAS_NATIVE_BASE,
                NativeFunctionKind::AddRole,
            ),
            NativeFunction::new(
                "removeRole",
                vec![AbiType::Address, AbiType::String],
                PermFlag::REMOVE_ROLE,
                config::GAS_NATIVE_BASE,
                NativeFunctionKind::RemoveRole,
            ),
            NativeFunction::new(
                "hasRole",
                vec![AbiType::Address, AbiType::String],
                PermFlag::HAS_ROLE,
                config::GAS_NATIVE_BASE,
                NativeFunctionKind::HasRole,
            ),
            NativeFunction::new(
                "setBase",
                vec![AbiType::Address, AbiType::Uint64, AbiType::Bool],
                PermFlag::SET_BASE,
                config::GAS_NATIVE_BASE,
                NativeFunctionKind::SetBase,
            ),
            NativeFunction::new(
                "unsetBase",
                vec![AbiType::Address, AbiType::Uint64],
                PermFlag::UNSET_BASE,
                config::GAS_NATIVE_BASE,
                NativeFunctionKind::UnsetBase,
            ),
            NativeFunction::new(
                "hasBase",
                vec![AbiType::Address, AbiType::Uint64],
                PermFlag::HAS_BASE,
                config::GAS_NATIVE_BASE,
                NativeFunctionKind::HasBase,
            ),
            NativeFunction::new(
                "setGlobal",
                vec![AbiType::Uint64, AbiType::Bool],
                PermFlag::SET_GLOBAL,
                config::GAS_NATIVE_BASE,
                NativeFunctionKind::SetGlobal,
            ),
        ],
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRole {
    pub account: Address,
    pub role: RoleId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveRole {
    pub account: Address,
    pub role: RoleId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasRole {
    pub account: Address,
    pub role: RoleId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBase {
    pub account: Address,
    pub permission: PermFlag,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsetBase {
    pub account: Address,
    pub permission: PermFlag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HasBase {
    pub account: Address,
    pub permission: PermFlag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetGlobal {
    pub permission: PermFlag,
    pub value: bool,
}

/// A fully decoded call into the Permissions contract, one variant per
/// function, each carrying its own argument types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionsCall {
    AddRole(AddRole),
    RemoveRole(RemoveRole),
    HasRole(HasRole),
    SetBase(SetBase),
    UnsetBase(UnsetBase),
    HasBase(HasBase),
    SetGlobal(SetGlobal),
}

fn as_address(value: &AbiValue) -> Result<Address, ChainError> {
    match value {
        AbiValue::Address(address) => Ok(*address),
        _ => Err(AbiError::TypeMismatch.into()),
    }
}

fn as_u64(value: &AbiValue) -> Result<u64, ChainError> {
    match value {
        AbiValue::Uint64(n) => Ok(*n),
        _ => Err(AbiError::TypeMismatch.into()),
    }
}

fn as_bool(value: &AbiValue) -> Result<bool, ChainError> {
    match value {
        AbiValue::Bool(b) => Ok(*b),
        _ => Err(AbiError::TypeMismatch.into()),
    }
}

fn as_role(value: &AbiValue) -> Result<RoleId, ChainError> {
    match value {
        AbiValue::String(bytes) => Ok(RoleId::from_bytes(bytes)?),
        _ => Err(AbiError::TypeMismatch.into()),
    }
}

fn expect_args(values: &[AbiValue], count: usize) -> Result<(), ChainError> {
    chain_assert(values.len() == count, AbiError::NotEnoughBytes.into())
}

impl PermissionsCall {
    /// Builds the typed call from argument values decoded against the
    /// function's declared ABI type sequence.
    pub fn from_values(
        kind: NativeFunctionKind,
        values: &[AbiValue],
    ) -> Result<Self, ChainError> {
        match kind {
            NativeFunctionKind::AddRole => {
                expect_args(values, 2)?;
                Ok(PermissionsCall::AddRole(AddRole {
                    account: as_address(&values[0])?,
                    role: as_role(&values[1])?,
                }))
            }
            NativeFunctionKind::RemoveRole => {
                expect_args(values, 2)?;
                Ok(PermissionsCall::RemoveRole(RemoveRole {
                    account: as_address(&values[0])?,
                    role: as_role(&values[1])?,
                }))
            }
            NativeFunctionKind::HasRole => {
                expect_args(values, 2)?;
                Ok(PermissionsCall::HasRole(HasRole {
                    account: as_address(&values[0])?,
                    role: as_role(&values[1])?,
                }))
            }
            NativeFunctionKind::SetBase => {
                expect_args(values, 3)?;
                Ok(PermissionsCall::SetBase(SetBase {
                    account: as_address(&values[0])?,
                    permission: PermFlag(as_u64(&values[1])?),
                    value: as_bool(&values[2])?,
                }))
            }
            NativeFunctionKind::UnsetBase => {
                expect_args(values, 2)?;
                Ok(PermissionsCall::UnsetBase(UnsetBase {
                    account: as_address(&values[0])?,
                    permission: PermFlag(as_u64(&values[1])?),
                }))
            }
            NativeFunctionKind::HasBase => {
                expect_args(values, 2)?;
                Ok(PermissionsCall::HasBase(HasBase {
                    account: as_address(&values[0])?,
                    permission: PermFlag(as_u64(&values[1])?),
                }))
            }
            NativeFunctionKind::SetGlobal => {
                expect_args(values, 2)?;
                Ok(PermissionsCall::SetGlobal(SetGlobal {
                    permission: PermFlag(as_u64(&values[0])?),
                    value: as_bool(&values[1])?,
                }))
            }
        }
    }
}

pub fn add_role<S: AccountState>(
    state: &mut StateCache<S>,
    call: &AddRole,
) -> Result<bool, ChainError> {
    state.add_role(&call.account, call.role)
}

pub fn remove_role<S: AccountState>(
    state: &mut StateCache<S>,
    call: &RemoveRole,
) -> Result<bool, ChainError> {
    state.remove_role(&call.account, call.role)
}

pub fn has_role<S: AccountState>(
    state: &mut StateCache<S>,
    call: &HasRole,
) -> Result<bool, ChainError> {
    Ok(state.get_permissions(&call.account)?.has_role(call.role))
}

pub fn set_base<S: AccountState>(
    state: &mut StateCache<S>,
    call: &SetBase,
) -> Result<bool, ChainError> {
    chain_assert(
        call.permission.is_valid(),
        ChainError::InvalidPermission(call.permission),
    )?;
    state.set_permission(&call.account, call.permission, call.value)?;
    Ok(true)
}

pub fn unset_base<S: AccountState>(
    state: &mut StateCache<S>,
    call: &UnsetBase,
) -> Result<bool, ChainError> {
    chain_assert(
        call.permission.is_valid(),
        ChainError::InvalidPermission(call.permission),
    )?;
    state.unset_permission(&call.account, call.permission)?;
    Ok(true)
}

/// Answers through the resolver, so the global fallback applies exactly as
/// it would for the real operation.
pub fn has_base<S: AccountState>(
    state: &mut StateCache<S>,
    call: &HasBase,
) -> Result<bool, ChainError> {
    AuthorizationManager::has_permission(state, &call.account, call.permission)
}

pub fn set_global<S: AccountState>(
    state: &mut StateCache<S>,
    call: &SetGlobal,
) -> Result<bool, ChainError> {
    chain_assert(
        call.permission.is_valid(),
        ChainError::InvalidPermission(call.permission),
    )?;
    state.set_permission(&GLOBAL_PERMISSIONS_ADDRESS, call.permission, call.value)?;
    Ok(true)
}
