//! Defines the staged payload: the fixed header written in front of the
//! compressed stream, and the efficient peeking of that header.
//!
//! Layout: `marker (2) ∥ payload_len (u16 LE) ∥ compressed stream`.
//! `payload_len` is the size of the checksummed record *before* compression;
//! readers use it to know where the record ends, since the base-32 transform
//! may add trailing pad bits.

use crate::bridge::format::{HEADER_MARKER, HEADER_SIZE, MAX_PAYLOAD_LEN};
use crate::error::PayBySquareError;

/// Metadata extracted from a staged payload's header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeHeader {
    pub marker: [u8; 2],
    pub payload_len: u16,
}

/// Checks that a checksummed record fits the 16-bit length field.
pub fn checked_payload_len(payload_len: usize) -> Result<u16, PayBySquareError> {
    if payload_len > MAX_PAYLOAD_LEN {
        return Err(PayBySquareError::PayloadTooLarge(payload_len));
    }
    u16::try_from(payload_len).map_err(|_| PayBySquareError::PayloadTooLarge(payload_len))
}

/// Writes `marker ∥ payload_len ∥ compressed`.
pub fn wrap(payload_len: u16, compressed: &[u8]) -> Vec<u8> {
    let mut staged = Vec::with_capacity(HEADER_SIZE + compressed.len());
    staged.extend_from_slice(&HEADER_MARKER);
    staged.extend_from_slice(&payload_len.to_le_bytes());
    staged.extend_from_slice(compressed);
    staged
}

/// Reads the header without touching the compressed stream.
pub fn peek_header(staged: &[u8]) -> Result<EnvelopeHeader, PayBySquareError> {
    if staged.len() < HEADER_SIZE {
        return Err(PayBySquareError::EnvelopeError(format!(
            "staged payload is {} bytes, shorter than the {}-byte header",
            staged.len(),
            HEADER_SIZE
        )));
    }
    Ok(EnvelopeHeader {
        marker: [staged[0], staged[1]],
        payload_len: u16::from_le_bytes([staged[2], staged[3]]),
    })
}

/// Splits a staged payload into its header and compressed stream.
pub fn unwrap(staged: &[u8]) -> Result<(EnvelopeHeader, &[u8]), PayBySquareError> {
    let header = peek_header(staged)?;
    Ok((header, &staged[HEADER_SIZE..]))
}
