use core::fmt;

use serde::{Deserialize, Serialize};

/// Fixed-width byte array with hex display and hex-string serde.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedBytes<const N: usize>(pub [u8; N]);

/// A 32-byte word, the unit of the contract ABI.
pub type Word256 = FixedBytes<32>;

/// A 20-byte account address.
pub type Address = FixedBytes<20>;

impl<const N: usize> FixedBytes<N> {
    pub const ZERO: Self = FixedBytes([0u8; N]);

    #[inline]
    pub fn new(bytes: [u8; N]) -> Self {
        FixedBytes(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Left-pads `data` with zero bytes. Panics if `data` is wider than `N`,
    /// callers must validate variable-length input first.
    #[inline]
    pub fn left_pad(data: &[u8]) -> Self {
        assert!(data.len() <= N, "input wider than {} bytes", N);
        let mut out = [0u8; N];
        out[N - data.len()..].copy_from_slice(data);
        FixedBytes(out)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl Word256 {
    /// The address held in the rightmost 20 bytes of the word.
    #[inline]
    pub fn to_address(self) -> Address {
        let mut out = [0u8; 20];
        out.copy_from_slice(&self.0[12..]);
        FixedBytes(out)
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        Word256::left_pad(&value.to_be_bytes())
    }

    /// The u64 in the rightmost 8 bytes, provided the rest of the word is zero.
    #[inline]
    pub fn to_u64(self) -> Option<u64> {
        if self.0[..24].iter().any(|b| *b != 0) {
            return None;
        }
        let mut out = [0u8; 8];
        out.copy_from_slice(&self.0[24..]);
        Some(u64::from_be_bytes(out))
    }
}

impl Address {
    /// The word with this address right-aligned, per the ABI convention.
    #[inline]
    pub fn to_word256(self) -> Word256 {
        Word256::left_pad(&self.0)
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    #[inline]
    fn default() -> Self {
        FixedBytes([0u8; N])
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    #[inline]
    fn from(bytes: [u8; N]) -> Self {
        FixedBytes(bytes)
    }
}

impl<const N: usize> Serialize for FixedBytes<N> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let hex_string = hex::encode(self.0);
        serializer.serialize_str(&hex_string)
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_string = String::deserialize(deserializer)?;
        let bytes = hex::decode(&hex_string).map_err(serde::de::Error::custom)?;
        let bytes: [u8; N] = bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom(format!("expected {} bytes", N)))?;
        Ok(FixedBytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_pad() {
        let word = Word256::left_pad(&[0x12, 0x34]);
        assert_eq!(word.0[30..], [0x12, 0x34]);
        assert!(word.0[..30].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_word_u64_roundtrip() {
        let word = Word256::from_u64(0xdead_beef);
        assert_eq!(word.to_u64(), Some(0xdead_beef));
    }

    #[test]
    fn test_word_u64_overflow() {
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert_eq!(Word256::new(bytes).to_u64(), None);
    }

    #[test]
    fn test_address_word_roundtrip() {
        let address = Address::left_pad(&[1, 2, 3]);
        assert_eq!(address.to_word256().to_address(), address);
    }

    #[test]
    fn test_display() {
        let address = Address::left_pad(&[0xab]);
        assert_eq!(address.to_string(), "00000000000000000000000000000000000000ab");
    }
}
