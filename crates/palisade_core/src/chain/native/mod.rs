mod contract;
mod dispatch;
mod permissions_contract;

pub use contract::{NativeContract, NativeContractRegistry, NativeFunction, NativeFunctionKind};
pub use dispatch::NativeDispatcher;
pub use permissions_contract::{
    AddRole, HasBase, HasRole, PermissionsCall, RemoveRole, SetBase, SetGlobal, UnsetBase,
    permissions_contract,
};
