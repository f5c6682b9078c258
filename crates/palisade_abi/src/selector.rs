use core::fmt;

use palisade_crypto::keccak256;

use crate::{AbiType, signature};

/// The 4-byte function identifier: the first four bytes of the Keccak-256
/// hash of the canonical signature string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FunctionSelector(pub [u8; 4]);

impl FunctionSelector {
    pub fn from_signature(sig: &str) -> Self {
        let hash = keccak256(sig);
        let mut out = [0u8; 4];
        out.copy_from_slice(&hash.as_bytes()[..4]);
        FunctionSelector(out)
    }

    pub fn from_parts(name: &str, arguments: &[AbiType]) -> Self {
        Self::from_signature(&signature(name, arguments))
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for FunctionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_role_selector() {
        // Value produced by compiling the equivalent Solidity interface.
        let selector = FunctionSelector::from_signature("hasRole(address,string)");
        assert_eq!(selector.to_string(), "217fe6c6");
    }

    #[test]
    fn test_from_parts_matches_signature() {
        assert_eq!(
            FunctionSelector::from_parts("hasRole", &[AbiType::Address, AbiType::String]),
            FunctionSelector::from_signature("hasRole(address,string)")
        );
    }
}
