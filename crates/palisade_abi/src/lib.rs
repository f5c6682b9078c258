//! Contract ABI calling convention: 4-byte Keccak selectors, 32-byte
//! big-endian words for fixed-size values, offset + length framing for
//! dynamic values.

mod decode;
mod encode;
mod selector;
mod types;

use thiserror::Error;

pub use decode::{decode_arguments, split_selector};
pub use encode::{encode_arguments, encode_bool, encode_call};
pub use selector::FunctionSelector;
pub use types::{AbiType, AbiValue, signature};

pub const WORD_SIZE: usize = 32;

/// Error that can be returned when decoding call data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("call data shorter than a function selector")]
    MissingSelector,
    #[error("not enough bytes in call data")]
    NotEnoughBytes,
    #[error("dynamic argument offset out of range")]
    InvalidOffset,
    #[error("dynamic argument length out of range")]
    InvalidLength,
    #[error("integer argument wider than 64 bits")]
    IntegerTooLarge,
    #[error("boolean argument is neither 0 nor 1")]
    InvalidBool,
    #[error("argument value does not match its declared type")]
    TypeMismatch,
}
