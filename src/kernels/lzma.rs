//! This module contains the pure, stateless kernels for raw LZMA1 compression
//! and decompression.
//!
//! This is the compression stage codec. The stream is "raw": no `.xz` or
//! `.lzma` container, no header carrying the filter properties. Encoder and
//! decoder must therefore agree on the filter chain out of band, which is why
//! both functions take an explicit `LzmaConfig`. The module is a safe,
//! panic-free wrapper around the `liblzma` crate.

use std::io::{Read, Write};

use liblzma::read::XzDecoder;
use liblzma::stream::{Filters, LzmaOptions, Stream};
use liblzma::write::XzEncoder;

use crate::config::LzmaConfig;
use crate::error::PayBySquareError;

//==================================================================================
// 1. Core Logic (The "Engine")
//==================================================================================

/// Builds the single-filter LZMA1 chain described by `config`.
fn build_filters(config: &LzmaConfig) -> Result<Filters, PayBySquareError> {
    let mut options = LzmaOptions::new_preset(config.preset)?;
    options
        .literal_context_bits(config.literal_context_bits)
        .literal_position_bits(config.literal_position_bits)
        .position_bits(config.position_bits)
        .dict_size(config.dict_size);

    let mut filters = Filters::new();
    filters.lzma1(&options);
    Ok(filters)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Compresses `input_bytes` into a raw LZMA1 stream terminated by an
/// end-of-payload marker.
pub fn encode(input_bytes: &[u8], config: &LzmaConfig) -> Result<Vec<u8>, PayBySquareError> {
    let filters = build_filters(config)?;
    let stream = Stream::new_raw_encoder(&filters)?;

    let mut encoder = XzEncoder::new_stream(Vec::with_capacity(input_bytes.len()), stream);
    encoder
        .write_all(input_bytes)
        .map_err(|e| PayBySquareError::LzmaError(e.to_string()))?;

    // `finish` flushes the range coder and writes the end marker.
    encoder
        .finish()
        .map_err(|e| PayBySquareError::LzmaError(e.to_string()))
}

/// Decompresses a raw LZMA1 stream produced with the same `config`.
pub fn decode(input_bytes: &[u8], config: &LzmaConfig) -> Result<Vec<u8>, PayBySquareError> {
    let filters = build_filters(config)?;
    let stream = Stream::new_raw_decoder(&filters)?;

    let mut decoder = XzDecoder::new_stream(input_bytes, stream);
    let mut output_buf = Vec::new();
    decoder
        .read_to_end(&mut output_buf)
        .map_err(|e| PayBySquareError::LzmaError(e.to_string()))?;
    Ok(output_buf)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
