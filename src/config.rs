// In: src/config.rs

//! The single source of truth for all encoder configuration.
//!
//! Two layers live here:
//! 1. `LzmaConfig`, the filter parameters handed explicitly to the compression
//!    kernel. The decoder side of the standard assumes one fixed parameter set
//!    and carries no metadata, so any other value produces a token that
//!    readers silently fail to open. `LzmaConfig::PAY_BY_SQUARE` is that set.
//! 2. `EncoderConfig`, the user-facing settings (defaults applied by the
//!    stateless API). It can be loaded from JSON at the application boundary.

use serde::{Deserialize, Serialize};

use crate::error::PayBySquareError;

//==================================================================================
// I. LZMA Filter Parameters
//==================================================================================

/// Parameters for the raw LZMA1 filter used by the compression stage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LzmaConfig {
    /// liblzma preset the remaining encoder knobs (match finder, nice length,
    /// depth, mode) are taken from before the overrides below are applied.
    pub preset: u32,
    /// Number of literal context bits (`lc`).
    pub literal_context_bits: u32,
    /// Number of literal position bits (`lp`).
    pub literal_position_bits: u32,
    /// Number of position bits (`pb`).
    pub position_bits: u32,
    /// Dictionary size in bytes.
    pub dict_size: u32,
}

impl LzmaConfig {
    /// The only parameter set pay-by-square readers accept.
    pub const PAY_BY_SQUARE: LzmaConfig = LzmaConfig {
        preset: 6,
        literal_context_bits: 3,
        literal_position_bits: 0,
        position_bits: 2,
        dict_size: 128 * 1024,
    };
}

impl Default for LzmaConfig {
    fn default() -> Self {
        Self::PAY_BY_SQUARE
    }
}

//==================================================================================
// II. The Unified EncoderConfig
//==================================================================================

/// Settings for the stateless encoding API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct EncoderConfig {
    /// Currency used when a request does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Filter parameters for the compression stage.
    #[serde(default)]
    pub lzma: LzmaConfig,
}

impl EncoderConfig {
    /// Parses a config from a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PayBySquareError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            lzma: LzmaConfig::default(),
        }
    }
}

/// Helper for `serde` to provide a default for `default_currency`.
pub(crate) fn default_currency() -> String {
    "EUR".to_string()
}
