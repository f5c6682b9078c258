use sha3::{Digest, Keccak256};

use crate::Word256;

/// Keccak-256 digest, the hash the contract ABI derives selectors and
/// native contract addresses from.
#[inline]
pub fn keccak256(data: impl AsRef<[u8]>) -> Word256 {
    let hash = Keccak256::digest(data.as_ref());
    let mut out = [0u8; 32];
    out.copy_from_slice(hash.as_ref());
    Word256::new(out)
}
