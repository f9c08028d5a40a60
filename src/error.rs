// In: src/error.rs

//! This module defines the single, unified error type for the entire pay-by-square library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayBySquareError {
    // =========================================================================
    // === Validation Errors (raised before any token is produced)
    // =========================================================================
    #[error("Invalid number of accounts: expected between 1 and 5, got {0}")]
    InvalidAccountCount(usize),

    #[error("Invalid account entry: {0}")]
    InvalidAccountEntry(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Payload too large: {0} bytes exceeds the 65535 byte limit of the length field")]
    PayloadTooLarge(usize),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading a request or config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[error("FFI operation failed: {0}")]
    FfiError(String),

    // =========================================================================
    // === Low-Level Pipeline/Kernel Errors
    // =========================================================================
    #[error("LZMA operation failed: {0}")]
    LzmaError(String),

    #[error("Base-32 decoding error: {0}")]
    Base32DecodeError(String),

    #[error("Envelope format error: {0}")]
    EnvelopeError(String),

    #[error("Checksum mismatch: expected {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("Pipeline execution failed at stage '{stage}': {source}")]
    PipelineError {
        stage: String,
        #[source]
        source: Box<PayBySquareError>,
    },
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<liblzma::stream::Error> for PayBySquareError {
    fn from(err: liblzma::stream::Error) -> Self {
        PayBySquareError::LzmaError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<pyo3::PyErr> for PayBySquareError {
    fn from(err: pyo3::PyErr) -> Self {
        PayBySquareError::FfiError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<PayBySquareError> for pyo3::PyErr {
    fn from(err: PayBySquareError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
