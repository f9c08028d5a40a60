//! This module contains the pure, stateless kernels for the pay-by-square
//! base-32 transform (the bit-packing stage).
//!
//! This is not RFC 4648 base32. The alphabet is `0-9A-V`, the input is read as
//! one MSB-first bit stream, and the final partial group is right-padded with
//! zero bits instead of emitting `=` characters. The original byte length is
//! carried inside the payload, so the token never signals it.

use bitvec::prelude::*;

use crate::error::PayBySquareError;

//==================================================================================
// Format Constants
//==================================================================================
/// The 32-symbol alphabet, indexed by the 5-bit group value.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";
/// Number of bits represented by one token character.
pub const BITS_PER_CHAR: usize = 5;

//==================================================================================
// 1. Core Logic (The "Engine")
//==================================================================================

/// Maps a token character back to its 5-bit group value.
fn symbol_value(symbol: u8) -> Option<u8> {
    match symbol {
        b'0'..=b'9' => Some(symbol - b'0'),
        b'A'..=b'V' => Some(symbol - b'A' + 10),
        _ => None,
    }
}

/// Reads an MSB-first group of at most 8 bits as an unsigned integer.
fn group_value(group: &BitSlice<u8, Msb0>) -> u8 {
    group
        .iter()
        .by_vals()
        .fold(0u8, |acc, bit| (acc << 1) | bit as u8)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Number of token characters produced for `byte_len` input bytes: `ceil(8L / 5)`.
pub fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(BITS_PER_CHAR)
}

/// Packs `input_bytes` into a token string.
pub fn encode(input_bytes: &[u8]) -> String {
    let mut bits: BitVec<u8, Msb0> = BitVec::from_slice(input_bytes);

    // Right-pad with zero bits up to a multiple of five.
    let padded_len = bits.len().div_ceil(BITS_PER_CHAR) * BITS_PER_CHAR;
    bits.resize(padded_len, false);

    bits.chunks_exact(BITS_PER_CHAR)
        .map(|group| ALPHABET[group_value(group) as usize] as char)
        .collect()
}

/// Unpacks a token back into the bytes it was produced from.
///
/// Trailing pad bits must be zero and shorter than one character, otherwise the
/// token could not have come from `encode`.
pub fn decode(token: &str) -> Result<Vec<u8>, PayBySquareError> {
    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(token.len() * BITS_PER_CHAR);

    for (position, symbol) in token.bytes().enumerate() {
        let value = symbol_value(symbol).ok_or_else(|| {
            PayBySquareError::Base32DecodeError(format!(
                "invalid character {:?} at position {}",
                symbol as char, position
            ))
        })?;
        bits.extend_from_bitslice(&value.view_bits::<Msb0>()[8 - BITS_PER_CHAR..]);
    }

    let byte_len = bits.len() / 8;
    let pad = &bits[byte_len * 8..];
    if pad.len() >= BITS_PER_CHAR {
        return Err(PayBySquareError::Base32DecodeError(format!(
            "token length {} cannot be produced from whole bytes",
            token.len()
        )));
    }
    if pad.any() {
        return Err(PayBySquareError::Base32DecodeError(
            "non-zero padding bits".to_string(),
        ));
    }

    bits.truncate(byte_len * 8);
    Ok(bits.into_vec())
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_token() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_single_byte_is_right_padded() {
        // 0xFF -> 11111 111(00) -> V, S
        assert_eq!(encode(&[0xFF]), "VS");
        // 0x01 -> 00000 001(00) -> 0, 4
        assert_eq!(encode(&[0x01]), "04");
    }

    #[test]
    fn test_five_bytes_map_to_eight_chars_without_padding() {
        // 0x00 0x44 0x32 0x14 0xC7 -> 00000 00001 00010 00011 00100 00101 00110 00111
        let token = encode(&[0x00, 0x44, 0x32, 0x14, 0xC7]);
        assert_eq!(token, "01234567");
    }

    #[test]
    fn test_header_prefix_of_staged_payload() {
        // Marker 0x00 0x00 followed by a length of 0x47 (71 bytes).
        let token = encode(&[0x00, 0x00, 0x47, 0x00]);
        assert_eq!(&token[..3], "000");
        assert_eq!(token.len(), encoded_len(4));
    }

    #[test]
    fn test_encoded_len_formula() {
        for len in 0..64 {
            let input = vec![0xA5u8; len];
            assert_eq!(encode(&input).len(), encoded_len(len));
            assert_eq!(encoded_len(len), (8 * len + 4) / 5);
        }
    }

    #[test]
    fn test_alphabet_closure() {
        let input: Vec<u8> = (0..=255u8).collect();
        let token = encode(&input);
        assert!(token.bytes().all(|c| ALPHABET.contains(&c)));
    }

    #[test]
    fn test_decode_reverses_encode() {
        let input: Vec<u8> = (0..=255u8).rev().collect();
        for len in [1, 2, 3, 4, 5, 6, 7, 100, 256] {
            assert_eq!(decode(&encode(&input[..len])).unwrap(), &input[..len]);
        }
    }

    #[test]
    fn test_decode_rejects_characters_outside_alphabet() {
        assert!(matches!(
            decode("00W0"),
            Err(PayBySquareError::Base32DecodeError(_))
        ));
        assert!(decode("00a0").is_err());
    }

    #[test]
    fn test_decode_rejects_non_zero_padding() {
        // "VS" pads with two zero bits; "VT" sets the last padding bit.
        assert_eq!(decode("VS").unwrap(), vec![0xFF]);
        assert!(decode("VT").is_err());
    }

    #[test]
    fn test_decode_rejects_dangling_character() {
        // Three characters carry 15 bits: one byte plus seven bits of padding.
        assert!(decode("000").is_err());
    }
}
