// src/pipeline/orchestrator.rs

use crate::config::LzmaConfig;
use crate::error::PayBySquareError;
use crate::kernels::{base32, checksum, lzma};
use crate::pipeline::envelope;
use crate::pipeline::record::{self, IntermediateRecord};
use crate::pipeline::Stage;
use crate::types::PaymentRequest;

//==================================================================================
// 1. Stage Helpers
//==================================================================================

fn stage_error(stage: Stage, source: PayBySquareError) -> PayBySquareError {
    PayBySquareError::PipelineError {
        stage: stage.to_string(),
        source: Box::new(source),
    }
}

/// Compresses the checksummed record and wraps it in the staged header.
///
/// The length limit is checked before any compression work is done.
fn compress_stage(checksummed: &[u8], config: &LzmaConfig) -> Result<Vec<u8>, PayBySquareError> {
    let payload_len = envelope::checked_payload_len(checksummed.len())?;
    let compressed =
        lzma::encode(checksummed, config).map_err(|e| stage_error(Stage::Compression, e))?;

    log_metric!(
        "event" = "stage_complete",
        "stage" = Stage::Compression,
        "input_bytes" = payload_len,
        "output_bytes" = compressed.len()
    );

    Ok(envelope::wrap(payload_len, &compressed))
}

//==================================================================================
// 2. Public Orchestration API
//==================================================================================

/// Runs the record, integrity, compression and bit-packing stages in order.
///
/// Pure and reentrant: the result depends only on `request` and `config`.
pub fn encode_payment(
    request: &PaymentRequest,
    config: &LzmaConfig,
) -> Result<String, PayBySquareError> {
    // 1. Record builder. Validation errors surface unwrapped.
    let record: IntermediateRecord = record::build(request)?;
    log_metric!(
        "event" = "stage_complete",
        "stage" = Stage::Record,
        "accounts" = request.accounts.len(),
        "output_bytes" = record.as_bytes().len()
    );

    // 2. Integrity stage.
    let checksummed = checksum::encode(record.as_bytes());
    log_metric!(
        "event" = "stage_complete",
        "stage" = Stage::Integrity,
        "output_bytes" = checksummed.len()
    );

    // 3. Compression stage.
    let staged = compress_stage(&checksummed, config)?;

    // 4. Bit-packing stage.
    let token = base32::encode(&staged);
    log_metric!(
        "event" = "stage_complete",
        "stage" = Stage::BitPacking,
        "input_bytes" = staged.len(),
        "token_chars" = token.len()
    );

    log::debug!(
        "encoded payment of {} {} to {} account(s) into a {}-character token",
        request.amount,
        request.currency,
        request.accounts.len(),
        token.len()
    );
    Ok(token)
}
