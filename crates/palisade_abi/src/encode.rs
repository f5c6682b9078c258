use palisade_crypto::Word256;

use crate::{AbiValue, FunctionSelector, WORD_SIZE};

/// Encodes an argument list: one head word per argument (the value for
/// static types, a tail offset for dynamic ones), followed by the tails in
/// argument order. Offsets are relative to the start of the argument block.
pub fn encode_arguments(values: &[AbiValue]) -> Vec<u8> {
    let head_size = values.len() * WORD_SIZE;
    let mut head = Vec::with_capacity(head_size);
    let mut tail = Vec::new();

    for value in values {
        match value {
            AbiValue::Address(address) => {
                head.extend_from_slice(address.to_word256().as_bytes());
            }
            AbiValue::Uint64(n) => {
                head.extend_from_slice(Word256::from_u64(*n).as_bytes());
            }
            AbiValue::Bool(b) => {
                head.extend_from_slice(Word256::from_u64(*b as u64).as_bytes());
            }
            AbiValue::String(bytes) => {
                let offset = (head_size + tail.len()) as u64;
                head.extend_from_slice(Word256::from_u64(offset).as_bytes());
                tail.extend_from_slice(Word256::from_u64(bytes.len() as u64).as_bytes());
                tail.extend_from_slice(bytes);
                // Right-pad the data to a whole word.
                let rem = bytes.len() % WORD_SIZE;
                if rem != 0 {
                    tail.extend(std::iter::repeat_n(0u8, WORD_SIZE - rem));
                }
            }
        }
    }

    head.extend_from_slice(&tail);
    head
}

/// Full call data: selector followed by the encoded argument block.
pub fn encode_call(selector: FunctionSelector, values: &[AbiValue]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + values.len() * WORD_SIZE);
    out.extend_from_slice(selector.as_bytes());
    out.extend_from_slice(&encode_arguments(values));
    out
}

/// Return-value encoding for a boolean: a 32-byte word holding 0 or 1.
pub fn encode_bool(value: bool) -> Vec<u8> {
    Word256::from_u64(value as u64).as_bytes().to_vec()
}
