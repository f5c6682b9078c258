use core::fmt;

use palisade_crypto::Address;

/// Argument type tags, written exactly as they appear in canonical
/// signature strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbiType {
    Address,
    Uint64,
    Bool,
    String,
}

impl AbiType {
    /// Dynamic types are encoded in the tail of the argument block, behind
    /// an offset word in the head.
    pub fn is_dynamic(self) -> bool {
        matches!(self, AbiType::String)
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AbiType::Address => "address",
            AbiType::Uint64 => "uint64",
            AbiType::Bool => "bool",
            AbiType::String => "string",
        };
        write!(f, "{}", name)
    }
}

/// A decoded (or to-be-encoded) argument value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiValue {
    Address(Address),
    Uint64(u64),
    Bool(bool),
    String(Vec<u8>),
}

impl AbiValue {
    pub fn abi_type(&self) -> AbiType {
        match self {
            AbiValue::Address(_) => AbiType::Address,
            AbiValue::Uint64(_) => AbiType::Uint64,
            AbiValue::Bool(_) => AbiType::Bool,
            AbiValue::String(_) => AbiType::String,
        }
    }
}

/// Canonical signature string, `name(type,type,...)`, the selector preimage.
pub fn signature(name: &str, arguments: &[AbiType]) -> String {
    let mut out = String::from(name);
    out.push('(');
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&argument.to_string());
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_formatting() {
        assert_eq!(
            signature("setBase", &[AbiType::Address, AbiType::Uint64, AbiType::Bool]),
            "setBase(address,uint64,bool)"
        );
        assert_eq!(signature("nullary", &[]), "nullary()");
    }
}
