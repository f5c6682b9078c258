use palisade_crypto::Word256;

use crate::{AbiError, AbiType, AbiValue, FunctionSelector, WORD_SIZE};

/// Splits call data into its selector and argument block.
pub fn split_selector(data: &[u8]) -> Result<(FunctionSelector, &[u8]), AbiError> {
    if data.len() < 4 {
        return Err(AbiError::MissingSelector);
    }
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&data[..4]);
    Ok((FunctionSelector(selector), &data[4..]))
}

fn read_word(data: &[u8], pos: &mut usize) -> Result<Word256, AbiError> {
    if *pos + WORD_SIZE > data.len() {
        return Err(AbiError::NotEnoughBytes);
    }
    let mut word = [0u8; WORD_SIZE];
    word.copy_from_slice(&data[*pos..*pos + WORD_SIZE]);
    *pos += WORD_SIZE;
    Ok(Word256::new(word))
}

fn read_string(data: &[u8], offset_word: Word256) -> Result<Vec<u8>, AbiError> {
    let offset = offset_word
        .to_u64()
        .and_then(|o| usize::try_from(o).ok())
        .ok_or(AbiError::InvalidOffset)?;
    if offset % WORD_SIZE != 0 || offset >= data.len() {
        return Err(AbiError::InvalidOffset);
    }
    let mut pos = offset;
    let length = read_word(data, &mut pos)?
        .to_u64()
        .and_then(|l| usize::try_from(l).ok())
        .ok_or(AbiError::InvalidLength)?;
    // pos <= data.len() holds after read_word; subtracting avoids overflow
    // for length words near u64::MAX.
    if length > data.len() - pos {
        return Err(AbiError::InvalidLength);
    }
    Ok(data[pos..pos + length].to_vec())
}

/// Decodes an argument block against a declared type sequence. Fails on
/// truncated input, malformed offsets and values outside the declared
/// type's range; decoded values come back in declaration order.
pub fn decode_arguments(types: &[AbiType], data: &[u8]) -> Result<Vec<AbiValue>, AbiError> {
    let mut values = Vec::with_capacity(types.len());
    let mut pos = 0usize;

    for ty in types {
        let word = read_word(data, &mut pos)?;
        let value = match ty {
            AbiType::Address => AbiValue::Address(word.to_address()),
            AbiType::Uint64 => AbiValue::Uint64(word.to_u64().ok_or(AbiError::IntegerTooLarge)?),
            AbiType::Bool => match word.to_u64() {
                Some(0) => AbiValue::Bool(false),
                Some(1) => AbiValue::Bool(true),
                _ => return Err(AbiError::InvalidBool),
            },
            AbiType::String => AbiValue::String(read_string(data, word)?),
        };
        values.push(value);
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use palisade_crypto::Address;

    use super::*;
    use crate::encode_arguments;

    #[test]
    fn test_roundtrip_mixed_arguments() {
        let original = vec![
            AbiValue::Address(Address::left_pad(&[7, 7, 7])),
            AbiValue::String(b"a role longer than one word of the abi block".to_vec()),
            AbiValue::Uint64(16),
            AbiValue::Bool(true),
        ];
        let types = [AbiType::Address, AbiType::String, AbiType::Uint64, AbiType::Bool];
        let data = encode_arguments(&original);
        assert_eq!(decode_arguments(&types, &data).unwrap(), original);
    }

    #[test]
    fn test_truncated_head() {
        let data = encode_arguments(&[AbiValue::Uint64(1)]);
        assert_eq!(
            decode_arguments(&[AbiType::Uint64, AbiType::Uint64], &data),
            Err(AbiError::NotEnoughBytes)
        );
        assert_eq!(
            decode_arguments(&[AbiType::Uint64], &data[..16]),
            Err(AbiError::NotEnoughBytes)
        );
    }

    #[test]
    fn test_bad_string_offset() {
        let mut data = encode_arguments(&[AbiValue::String(b"x".to_vec())]);
        data[31] = 0xff; // offset way past the end
        assert_eq!(
            decode_arguments(&[AbiType::String], &data),
            Err(AbiError::InvalidOffset)
        );
    }

    #[test]
    fn test_bad_string_length() {
        let mut data = encode_arguments(&[AbiValue::String(b"x".to_vec())]);
        data[63] = 0xff; // length past the end of the tail
        assert_eq!(
            decode_arguments(&[AbiType::String], &data),
            Err(AbiError::InvalidLength)
        );
    }

    #[test]
    fn test_huge_length_word() {
        // A length word near u64::MAX must fail the bounds check cleanly
        // rather than wrapping the end-of-string computation.
        let mut data = Vec::new();
        data.extend_from_slice(Word256::from_u64(32).as_bytes());
        data.extend_from_slice(Word256::from_u64(u64::MAX - 32).as_bytes());
        assert_eq!(
            decode_arguments(&[AbiType::String], &data),
            Err(AbiError::InvalidLength)
        );
    }

    #[test]
    fn test_bool_word_range() {
        let data = encode_arguments(&[AbiValue::Uint64(2)]);
        assert_eq!(
            decode_arguments(&[AbiType::Bool], &data),
            Err(AbiError::InvalidBool)
        );
    }

    #[test]
    fn test_split_selector() {
        assert_eq!(split_selector(&[1, 2]), Err(AbiError::MissingSelector));
        let (selector, rest) = split_selector(&[0xde, 0xad, 0xbe, 0xef, 9]).unwrap();
        assert_eq!(selector.to_string(), "deadbeef");
        assert_eq!(rest, &[9]);
    }
}
