mod digest;
mod fixed_bytes;

pub use digest::keccak256;
pub use fixed_bytes::{Address, FixedBytes, Word256};
