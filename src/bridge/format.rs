// In: src/bridge/format.rs

//! Defines all wire-level constants for the pay-by-square token.
//! This is the single source of truth for the record layout literals and the
//! staged-payload header that precedes the compressed stream.

//==================================================================================
// I. Record Layout
//==================================================================================

/// Separator between record fields. Field content is never escaped.
pub const FIELD_DELIMITER: &str = "\t";
/// Field 2: the document is a payment order.
pub const DOCUMENT_TYPE_PAYMENT_ORDER: &str = "1";
/// Field 3: a simple one-time payment.
pub const PAYMENT_TYPE_SIMPLE: &str = "1";
/// First trailing field: no standing order extension.
pub const NO_STANDING_ORDER: &str = "0";
/// Second trailing field: no direct debit ("inkaso") extension.
pub const NO_DIRECT_DEBIT: &str = "0";
/// strftime pattern of the due date field.
pub const DATE_FORMAT: &str = "%Y%m%d";
/// Number of fields before the account list.
pub const LEADING_FIELD_COUNT: usize = 12;
/// Number of fields after the account list.
pub const TRAILING_FIELD_COUNT: usize = 5;

//==================================================================================
// II. Staged Payload Header
//==================================================================================

/// Fixed two-byte marker at the start of the staged payload.
pub const HEADER_MARKER: [u8; 2] = [0x00, 0x00];
/// Marker (2) + little-endian payload length (2).
pub const HEADER_SIZE: usize = 4;
/// Largest checksummed record the length field can describe.
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// The public-facing struct for token analysis results, returned by `analyze_token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStats {
    /// Number of characters in the token.
    pub token_len: usize,
    /// Bytes recovered from the token (header plus compressed stream).
    pub staged_len: usize,
    /// The two marker bytes as found in the header.
    pub marker: [u8; 2],
    /// Declared length of the checksummed record before compression.
    pub payload_len: usize,
    /// Length of the compressed stream after the header.
    pub compressed_len: usize,
}
