//! The pure, stateless byte-level kernels of the encoding pipeline.
//!
//! Each kernel exposes an `encode` and its inverse `decode`. The orchestrator
//! only ever calls `encode`; the inverses exist so that every stage can be
//! verified in isolation and the whole token can be checked end to end.

pub mod base32;
pub mod checksum;
pub mod lzma;
