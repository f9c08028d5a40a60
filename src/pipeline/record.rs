//! The record builder: the first stage of the pipeline.
//!
//! Lays the payment fields out as one tab-joined line in the order the
//! standard prescribes: 12 leading fields, two per account, 5 trailing fields.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::bridge::format::{
    DATE_FORMAT, DOCUMENT_TYPE_PAYMENT_ORDER, FIELD_DELIMITER, LEADING_FIELD_COUNT,
    NO_DIRECT_DEBIT, NO_STANDING_ORDER, PAYMENT_TYPE_SIMPLE, TRAILING_FIELD_COUNT,
};
use crate::error::PayBySquareError;
use crate::types::{PaymentRequest, MAX_ACCOUNTS};

/// The serialized record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntermediateRecord(String);

impl IntermediateRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes fed to the integrity stage.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.split(FIELD_DELIMITER)
    }
}

/// Renders an amount with exactly two fractional digits and a `.` separator.
/// Midpoints round to even.
pub fn format_amount(amount: Decimal) -> Result<String, PayBySquareError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(PayBySquareError::InvalidAmount(format!(
            "amount must not be negative, got {}",
            amount
        )));
    }
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    // Normalizes a negative zero.
    rounded.set_sign_positive(true);
    Ok(rounded.to_string())
}

/// Converts a binary float amount to a `Decimal` holding its exact value.
///
/// Rounding then acts on the true binary value, so `2.675_f64` (stored as
/// 2.67499999...) renders as `2.67`, not `2.68`.
pub fn amount_from_f64(value: f64) -> Result<Decimal, PayBySquareError> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| PayBySquareError::InvalidAmount(format!("cannot represent {}", value)))
}

/// Builds the record for `request`.
///
/// The account count is checked before anything else; no other field is
/// validated beyond the amount's sign.
pub fn build(request: &PaymentRequest) -> Result<IntermediateRecord, PayBySquareError> {
    let account_count = request.accounts.len();
    if account_count == 0 || account_count > MAX_ACCOUNTS {
        return Err(PayBySquareError::InvalidAccountCount(account_count));
    }

    let amount = format_amount(request.amount)?;
    let date = request.date.format(DATE_FORMAT).to_string();
    let count = account_count.to_string();

    let mut fields: Vec<&str> =
        Vec::with_capacity(LEADING_FIELD_COUNT + 2 * account_count + TRAILING_FIELD_COUNT);
    fields.extend([
        "",
        DOCUMENT_TYPE_PAYMENT_ORDER,
        PAYMENT_TYPE_SIMPLE,
        amount.as_str(),
        request.currency.as_str(),
        date.as_str(),
        request.variable_symbol.as_str(),
        request.constant_symbol.as_str(),
        request.specific_symbol.as_str(),
        // Combined SEPA reference; the symbols above are always given separately.
        "",
        request.note.as_str(),
        count.as_str(),
    ]);
    for account in &request.accounts {
        fields.push(account.iban.as_str());
        fields.push(account.bank_code.as_str());
    }
    fields.extend([
        NO_STANDING_ORDER,
        NO_DIRECT_DEBIT,
        request.beneficiary_name.as_str(),
        request.beneficiary_address_1.as_str(),
        request.beneficiary_address_2.as_str(),
    ]);

    Ok(IntermediateRecord(fields.join(FIELD_DELIMITER)))
}
