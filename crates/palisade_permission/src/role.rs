use core::fmt;
use core::str::FromStr;

use palisade_crypto::Word256;
use serde::{Deserialize, Serialize};

use crate::PermissionError;

/// Role identifiers are stored at this fixed width, left-padded with zero
/// bytes. Longer inputs are rejected rather than truncated: truncation could
/// silently alias two distinct role names.
pub const MAX_ROLE_BYTES: usize = 32;

/// A role identifier, normalized to a fixed 32-byte word so that equality is
/// a plain byte comparison regardless of the input string's length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoleId(Word256);

impl RoleId {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PermissionError> {
        if bytes.len() > MAX_ROLE_BYTES {
            return Err(PermissionError::RoleTooLong(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }
        Ok(RoleId(Word256::left_pad(bytes)))
    }

    pub fn as_word(&self) -> &Word256 {
        &self.0
    }
}

impl FromStr for RoleId {
    type Err = PermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleId::from_bytes(s.as_bytes())
    }
}

impl fmt::Display for RoleId {
    /// Renders the original identifier by trimming the zero padding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.as_bytes();
        let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        write!(f, "{}", String::from_utf8_lossy(&bytes[start..]))
    }
}

impl Serialize for RoleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RoleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let a: RoleId = "validator".parse().unwrap();
        let b = RoleId::from_bytes(b"validator").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_word().as_bytes()[..23], [0u8; 23]);
    }

    #[test]
    fn test_display_trims_padding() {
        let role: RoleId = "auditor".parse().unwrap();
        assert_eq!(role.to_string(), "auditor");
    }

    #[test]
    fn test_too_long_rejected() {
        let long = "r".repeat(MAX_ROLE_BYTES + 1);
        assert!(matches!(
            long.parse::<RoleId>(),
            Err(PermissionError::RoleTooLong(_))
        ));
        let exact = "r".repeat(MAX_ROLE_BYTES);
        assert!(exact.parse::<RoleId>().is_ok());
    }

    #[test]
    fn test_serde_as_string() {
        let role: RoleId = "operator".parse().unwrap();
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"operator\"");
        let back: RoleId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, role);
    }
}
