// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Encoding Pipeline
// ====================================================================================
//
// Four stages, strictly forward, no branching:
//
//   PaymentRequest
//     |
//     `-> 1. [record::build]        -> IntermediateRecord (tab-joined text)
//     |
//     `-> 2. [kernels::checksum]    -> crc32 (LE) ∥ record bytes
//     |
//     `-> 3. [kernels::lzma]        -> raw LZMA1 stream
//         [envelope::wrap]          -> 00 00 ∥ len (u16 LE) ∥ stream
//     |
//     `-> 4. [kernels::base32]      -> token over 0-9A-V
//
// Validation failures (account count, amount, payload size) surface to the
// caller as-is. Failures inside a codec are wrapped in `PipelineError` with the
// name of the stage that raised them.
// ====================================================================================

use std::fmt;

pub mod envelope;
pub mod orchestrator;
pub mod record;


/// The stages of the encoding pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Record,
    Integrity,
    Compression,
    BitPacking,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Record => "record",
            Stage::Integrity => "integrity",
            Stage::Compression => "compression",
            Stage::BitPacking => "bit_packing",
        };
        f.write_str(name)
    }
}
