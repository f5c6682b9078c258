mod account;
mod base;
mod error;
mod flags;
mod role;

use palisade_crypto::Address;

pub use account::AccountPermissions;
pub use base::BasePermissions;
pub use error::PermissionError;
pub use flags::PermFlag;
pub use role::{MAX_ROLE_BYTES, RoleId};

/// Reserved address holding the process-wide fallback permissions.
/// Every resolution that finds a flag unset on an account consults the
/// account stored here.
pub const GLOBAL_PERMISSIONS_ADDRESS: Address = Address::ZERO;
