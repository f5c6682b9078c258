use thiserror::Error;

use crate::{PermFlag, role::MAX_ROLE_BYTES};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// A zero or out-of-vocabulary flag was used where a designated bit was
    /// required. A programming or contract-definition error, never expected
    /// from well-formed callers.
    #[error("invalid permission flag {0}")]
    InvalidPermission(PermFlag),
    /// The flag's set-bit is off. An internal signal telling the caller to
    /// consult the fallback authority, not a user-visible failure.
    #[error("permission flag {0} not set on this account")]
    ValueNotSet(PermFlag),
    #[error("role identifier '{0}' is longer than {MAX_ROLE_BYTES} bytes")]
    RoleTooLong(String),
    #[error("unknown permission name '{0}'")]
    UnknownPermissionName(String),
    #[error("permission flag {0} has no canonical name")]
    UnknownPermissionFlag(PermFlag),
}
