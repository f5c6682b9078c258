use serde::{Deserialize, Serialize};

use crate::{PermFlag, PermissionError};

/// An account's base permission record: one bit array for the values and one
/// recording which values have been explicitly set. A value bit is only
/// authoritative while its set-bit is on; otherwise resolution falls back to
/// the global permissions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BasePermissions {
    pub perms: PermFlag,
    #[serde(rename = "set")]
    pub set_bit: PermFlag,
}

impl BasePermissions {
    pub fn new(perms: PermFlag, set_bit: PermFlag) -> Self {
        BasePermissions { perms, set_bit }
    }

    /// Value of a permission flag. `ValueNotSet` means the caller must
    /// consult the fallback authority, it is not a failure.
    pub fn get(&self, flag: PermFlag) -> Result<bool, PermissionError> {
        if flag.is_zero() {
            return Err(PermissionError::InvalidPermission(flag));
        }
        if (self.set_bit & flag).is_zero() {
            return Err(PermissionError::ValueNotSet(flag));
        }
        Ok(!(self.perms & flag).is_zero())
    }

    /// Writes the value bit and marks the flag as explicitly set.
    pub fn set(&mut self, flag: PermFlag, value: bool) -> Result<(), PermissionError> {
        if flag.is_zero() {
            return Err(PermissionError::InvalidPermission(flag));
        }
        self.set_bit |= flag;
        if value {
            self.perms |= flag;
        } else {
            self.perms = self.perms & !flag;
        }
        Ok(())
    }

    /// Clears only the set-bit. The underlying value bit is preserved so a
    /// later `set` observes the same stored value as before the unset.
    pub fn unset(&mut self, flag: PermFlag) -> Result<(), PermissionError> {
        if flag.is_zero() {
            return Err(PermissionError::InvalidPermission(flag));
        }
        self.set_bit = self.set_bit & !flag;
        Ok(())
    }

    pub fn is_set(&self, flag: PermFlag) -> bool {
        if flag.is_zero() {
            return false;
        }
        !(self.set_bit & flag).is_zero()
    }
}
