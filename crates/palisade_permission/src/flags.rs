use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Deserialize, Serialize};

use crate::PermissionError;

/// A permission capability, one designated bit per defined permission.
///
/// Bit values are part of the wire and genesis format and are frozen: they
/// must never be renumbered once released.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(transparent)]
pub struct PermFlag(pub u64);

impl PermFlag {
    // Base chain permissions occupy the low bits.
    pub const ROOT: PermFlag = PermFlag(1);
    pub const SEND: PermFlag = PermFlag(1 << 1);
    pub const CALL: PermFlag = PermFlag(1 << 2);
    pub const CREATE_CONTRACT: PermFlag = PermFlag(1 << 3);
    pub const CREATE_ACCOUNT: PermFlag = PermFlag(1 << 4);
    pub const BOND: PermFlag = PermFlag(1 << 5);
    pub const NAME: PermFlag = PermFlag(1 << 6);

    pub const NUM_BASE_PERMISSIONS: u32 = 7;
    pub const TOP_BASE_PERM_FLAG: PermFlag = PermFlag(1 << (Self::NUM_BASE_PERMISSIONS - 1));
    pub const ALL_BASE_PERM_FLAGS: PermFlag =
        PermFlag(Self::TOP_BASE_PERM_FLAG.0 | (Self::TOP_BASE_PERM_FLAG.0 - 1));

    /// Base permissions granted to accounts materialized from the genesis
    /// default template. Root is deliberately excluded.
    pub const DEFAULT_BASE_PERM_FLAGS: PermFlag = PermFlag(
        Self::SEND.0
            | Self::CALL.0
            | Self::CREATE_CONTRACT.0
            | Self::CREATE_ACCOUNT.0
            | Self::BOND.0
            | Self::NAME.0,
    );

    // Native contract administration permissions occupy a disjoint high
    // range; the low 32 bits stay reserved for chain permissions.
    pub const HAS_BASE: PermFlag = PermFlag(1 << 32);
    pub const SET_BASE: PermFlag = PermFlag(1 << 33);
    pub const UNSET_BASE: PermFlag = PermFlag(1 << 34);
    pub const SET_GLOBAL: PermFlag = PermFlag(1 << 35);
    pub const HAS_ROLE: PermFlag = PermFlag(1 << 36);
    pub const ADD_ROLE: PermFlag = PermFlag(1 << 37);
    pub const REMOVE_ROLE: PermFlag = PermFlag(1 << 38);

    pub const ALL_NATIVE_PERM_FLAGS: PermFlag = PermFlag(
        Self::HAS_BASE.0
            | Self::SET_BASE.0
            | Self::UNSET_BASE.0
            | Self::SET_GLOBAL.0
            | Self::HAS_ROLE.0
            | Self::ADD_ROLE.0
            | Self::REMOVE_ROLE.0,
    );

    pub const ALL_PERM_FLAGS: PermFlag =
        PermFlag(Self::ALL_BASE_PERM_FLAGS.0 | Self::ALL_NATIVE_PERM_FLAGS.0);

    pub const NONE: PermFlag = PermFlag(0);

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Non-zero and within the defined flag vocabulary.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0 != 0 && (self.0 & !Self::ALL_PERM_FLAGS.0) == 0
    }

    #[inline]
    pub fn contains(self, other: PermFlag) -> bool {
        self.0 & other.0 == other.0
    }

    /// Canonical name of a base permission flag. Requires exactly one of the
    /// seven base bits.
    pub fn to_name(self) -> Result<&'static str, PermissionError> {
        match self {
            Self::ROOT => Ok("root"),
            Self::SEND => Ok("send"),
            Self::CALL => Ok("call"),
            Self::CREATE_CONTRACT => Ok("create_contract"),
            Self::CREATE_ACCOUNT => Ok("create_account"),
            Self::BOND => Ok("bond"),
            Self::NAME => Ok("name"),
            _ => Err(PermissionError::UnknownPermissionFlag(self)),
        }
    }

    pub fn from_name(name: &str) -> Result<PermFlag, PermissionError> {
        match name {
            "root" => Ok(Self::ROOT),
            "send" => Ok(Self::SEND),
            "call" => Ok(Self::CALL),
            "create_contract" => Ok(Self::CREATE_CONTRACT),
            "create_account" => Ok(Self::CREATE_ACCOUNT),
            "bond" => Ok(Self::BOND),
            "name" => Ok(Self::NAME),
            _ => Err(PermissionError::UnknownPermissionName(name.to_string())),
        }
    }
}

impl fmt::Display for PermFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

impl BitOr for PermFlag {
    type Output = PermFlag;

    #[inline]
    fn bitor(self, rhs: PermFlag) -> PermFlag {
        PermFlag(self.0 | rhs.0)
    }
}

impl BitOrAssign for PermFlag {
    #[inline]
    fn bitor_assign(&mut self, rhs: PermFlag) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for PermFlag {
    type Output = PermFlag;

    #[inline]
    fn bitand(self, rhs: PermFlag) -> PermFlag {
        PermFlag(self.0 & rhs.0)
    }
}

impl Not for PermFlag {
    type Output = PermFlag;

    #[inline]
    fn not(self) -> PermFlag {
        PermFlag(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_FLAGS: [PermFlag; 7] = [
        PermFlag::ROOT,
        PermFlag::SEND,
        PermFlag::CALL,
        PermFlag::CREATE_CONTRACT,
        PermFlag::CREATE_ACCOUNT,
        PermFlag::BOND,
        PermFlag::NAME,
    ];

    #[test]
    fn test_base_flags_are_disjoint_single_bits() {
        let mut seen = PermFlag::NONE;
        for flag in BASE_FLAGS {
            assert_eq!(flag.0.count_ones(), 1);
            assert!((seen & flag).is_zero());
            seen |= flag;
        }
        assert_eq!(seen, PermFlag::ALL_BASE_PERM_FLAGS);
    }

    #[test]
    fn test_native_flags_disjoint_from_base() {
        assert!((PermFlag::ALL_BASE_PERM_FLAGS & PermFlag::ALL_NATIVE_PERM_FLAGS).is_zero());
    }

    #[test]
    fn test_default_excludes_root() {
        assert!(!PermFlag::DEFAULT_BASE_PERM_FLAGS.contains(PermFlag::ROOT));
        assert!(PermFlag::ALL_BASE_PERM_FLAGS.contains(PermFlag::DEFAULT_BASE_PERM_FLAGS));
    }

    #[test]
    fn test_name_table_roundtrip() {
        for flag in BASE_FLAGS {
            let name = flag.to_name().unwrap();
            assert_eq!(PermFlag::from_name(name).unwrap(), flag);
        }
    }

    #[test]
    fn test_name_table_rejects_unknown() {
        assert!(PermFlag::from_name("supervisor").is_err());
        assert!(PermFlag::HAS_ROLE.to_name().is_err());
        assert!((PermFlag::ROOT | PermFlag::SEND).to_name().is_err());
        assert!(PermFlag::NONE.to_name().is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(PermFlag::ALL_PERM_FLAGS.is_valid());
        assert!(PermFlag::ADD_ROLE.is_valid());
        assert!(!PermFlag::NONE.is_valid());
        assert!(!PermFlag(1 << 7).is_valid());
        assert!(!PermFlag(1 << 63).is_valid());
    }
}
