// In: src/bridge/stateless_api.rs

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bridge::format::TokenStats;
use crate::config::EncoderConfig;
use crate::error::PayBySquareError;
use crate::kernels::base32;
use crate::pipeline::{envelope, orchestrator};
use crate::types::{AccountsInput, PaymentRequest};

/// Keyword-style arguments of `generate`, mirroring the conventional
/// pay-by-square call: everything except the amount and the accounts is
/// optional. Unset `currency` and `date` are resolved on every call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    pub amount: Decimal,
    /// A single IBAN, a list of IBANs, or a list of `[iban, bank_code]` entries.
    pub iban: AccountsInput,
    /// Bank code for a single-IBAN `iban`; ignored for the list forms.
    #[serde(default)]
    pub swift: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub variable_symbol: String,
    #[serde(default)]
    pub constant_symbol: String,
    #[serde(default)]
    pub specific_symbol: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub beneficiary_name: String,
    #[serde(default)]
    pub beneficiary_address_1: String,
    #[serde(default)]
    pub beneficiary_address_2: String,
}

impl GenerateArgs {
    pub fn new(amount: Decimal, iban: impl Into<AccountsInput>) -> Self {
        Self {
            amount,
            iban: iban.into(),
            swift: String::new(),
            date: None,
            currency: None,
            variable_symbol: String::new(),
            constant_symbol: String::new(),
            specific_symbol: String::new(),
            note: String::new(),
            beneficiary_name: String::new(),
            beneficiary_address_1: String::new(),
            beneficiary_address_2: String::new(),
        }
    }

    /// Normalizes the accounts and resolves the defaults into a `PaymentRequest`.
    pub fn into_request(self, config: &EncoderConfig) -> Result<PaymentRequest, PayBySquareError> {
        let accounts = self.iban.normalize(&self.swift)?;
        Ok(PaymentRequest {
            amount: self.amount,
            accounts,
            currency: self
                .currency
                .unwrap_or_else(|| config.default_currency.clone()),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            variable_symbol: self.variable_symbol,
            constant_symbol: self.constant_symbol,
            specific_symbol: self.specific_symbol,
            note: self.note,
            beneficiary_name: self.beneficiary_name,
            beneficiary_address_1: self.beneficiary_address_1,
            beneficiary_address_2: self.beneficiary_address_2,
        })
    }
}

/// Encodes a fully resolved request into a pay-by-square token.
pub fn encode(request: &PaymentRequest) -> Result<String, PayBySquareError> {
    encode_with_config(request, &EncoderConfig::default())
}

/// Encodes a request with an explicit configuration.
pub fn encode_with_config(
    request: &PaymentRequest,
    config: &EncoderConfig,
) -> Result<String, PayBySquareError> {
    orchestrator::encode_payment(request, &config.lzma)
}

/// Resolves `args` (today's date, default currency, account shapes) and encodes them.
pub fn generate(args: GenerateArgs) -> Result<String, PayBySquareError> {
    generate_with_config(args, &EncoderConfig::default())
}

pub fn generate_with_config(
    args: GenerateArgs,
    config: &EncoderConfig,
) -> Result<String, PayBySquareError> {
    let request = args.into_request(config)?;
    encode_with_config(&request, config)
}

/// Analyzes a token's staged header without decompressing the payload.
pub fn analyze_token(token: &str) -> Result<TokenStats, PayBySquareError> {
    // 1. Undo the bit-packing; this is cheap and exact.
    let staged = base32::decode(token)?;

    // 2. Read only the fixed header.
    let (header, compressed) = envelope::unwrap(&staged)?;

    Ok(TokenStats {
        token_len: token.len(),
        staged_len: staged.len(),
        marker: header.marker,
        payload_len: header.payload_len as usize,
        compressed_len: compressed.len(),
    })
}
