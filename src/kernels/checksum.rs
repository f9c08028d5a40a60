//! This module contains the pure, stateless kernels for the integrity stage.
//!
//! The record bytes are prefixed with their CRC-32 (ISO-HDLC, the variant used
//! by zip and gzip), stored little-endian. The `crc32fast` crate implements
//! exactly this variant.

use crate::error::PayBySquareError;

/// Width of the checksum prefix in bytes.
pub const CHECKSUM_SIZE: usize = 4;

//==================================================================================
// 1. Core Logic
//==================================================================================

/// Computes the CRC-32/ISO-HDLC checksum of a byte slice.
pub fn crc32(input_bytes: &[u8]) -> u32 {
    crc32fast::hash(input_bytes)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Returns `crc32(input) (LE) ∥ input`.
pub fn encode(input_bytes: &[u8]) -> Vec<u8> {
    let mut output_buf = Vec::with_capacity(CHECKSUM_SIZE + input_bytes.len());
    output_buf.extend_from_slice(&crc32(input_bytes).to_le_bytes());
    output_buf.extend_from_slice(input_bytes);
    output_buf
}

/// Verifies the checksum prefix and returns the bytes that follow it.
pub fn decode(input_bytes: &[u8]) -> Result<&[u8], PayBySquareError> {
    if input_bytes.len() < CHECKSUM_SIZE {
        return Err(PayBySquareError::EnvelopeError(format!(
            "checksummed payload is {} bytes, shorter than its {}-byte checksum",
            input_bytes.len(),
            CHECKSUM_SIZE
        )));
    }
    let (prefix, body) = input_bytes.split_at(CHECKSUM_SIZE);
    let expected = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]);
    let actual = crc32(body);
    if expected != actual {
        return Err(PayBySquareError::ChecksumMismatch { expected, actual });
    }
    Ok(body)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
