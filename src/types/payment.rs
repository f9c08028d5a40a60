//! The payment request handed to the encoder, and its builder.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::default_currency;

/// Maximum number of accounts a single payment order may list.
pub const MAX_ACCOUNTS: usize = 5;

/// A beneficiary account: IBAN plus an optional bank (SWIFT/BIC) code.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub iban: String,
    /// Empty when the bank code is not known.
    #[serde(default)]
    pub bank_code: String,
}

impl BankAccount {
    pub fn new(iban: impl Into<String>, bank_code: impl Into<String>) -> Self {
        Self {
            iban: iban.into(),
            bank_code: bank_code.into(),
        }
    }
}

/// A fully resolved payment order, ready to be encoded.
///
/// Every field is explicit, including `date`: the encoder never reads the
/// clock. Use `PaymentRequest::builder` to get "today" filled in at build time.
/// Free-form strings are passed through verbatim and must not contain tabs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub accounts: Vec<BankAccount>,
    pub currency: String,
    pub date: NaiveDate,
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

impl PaymentRequest {
    pub fn builder(amount: Decimal, accounts: Vec<BankAccount>) -> PaymentRequestBuilder {
        PaymentRequestBuilder::new(amount, accounts)
    }
}

/// Chained construction of a `PaymentRequest` with the standard defaults:
/// currency `EUR`, empty strings, and the current local date.
#[derive(Debug, Clone)]
pub struct PaymentRequestBuilder {
    amount: Decimal,
    accounts: Vec<BankAccount>,
    currency: String,
    date: Option<NaiveDate>,
    variable_symbol: String,
    constant_symbol: String,
    specific_symbol: String,
    note: String,
    beneficiary_name: String,
    beneficiary_address_1: String,
    beneficiary_address_2: String,
}

impl PaymentRequestBuilder {
    pub fn new(amount: Decimal, accounts: Vec<BankAccount>) -> Self {
        Self {
            amount,
            accounts,
            currency: default_currency(),
            date: None,
            variable_symbol: String::new(),
            constant_symbol: String::new(),
            specific_symbol: String::new(),
            note: String::new(),
            beneficiary_name: String::new(),
            beneficiary_address_1: String::new(),
            beneficiary_address_2: String::new(),
        }
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn variable_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.variable_symbol = symbol.into();
        self
    }

    pub fn constant_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.constant_symbol = symbol.into();
        self
    }

    pub fn specific_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.specific_symbol = symbol.into();
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn beneficiary_name(mut self, name: impl Into<String>) -> Self {
        self.beneficiary_name = name.into();
        self
    }

    pub fn beneficiary_address_1(mut self, line: impl Into<String>) -> Self {
        self.beneficiary_address_1 = line.into();
        self
    }

    pub fn beneficiary_address_2(mut self, line: impl Into<String>) -> Self {
        self.beneficiary_address_2 = line.into();
        self
    }

    /// Finalizes the request. An unset date resolves to today's local date,
    /// read now rather than when the builder was created.
    pub fn build(self) -> PaymentRequest {
        PaymentRequest {
            amount: self.amount,
            accounts: self.accounts,
            currency: self.currency,
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            variable_symbol: self.variable_symbol,
            constant_symbol: self.constant_symbol,
            specific_symbol: self.specific_symbol,
            note: self.note,
            beneficiary_name: self.beneficiary_name,
            beneficiary_address_1: self.beneficiary_address_1,
            beneficiary_address_2: self.beneficiary_address_2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = PaymentRequest::builder(Decimal::ONE, vec![BankAccount::new("SK77", "")])
            .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .build();

        assert_eq!(request.currency, "EUR");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(request.variable_symbol.is_empty());
        assert!(request.note.is_empty());
        assert!(request.beneficiary_address_2.is_empty());
    }

    #[test]
    fn test_builder_resolves_today_when_date_is_unset() {
        let before = Local::now().date_naive();
        let request = PaymentRequest::builder(Decimal::ONE, vec![BankAccount::new("SK77", "")]).build();
        let after = Local::now().date_naive();

        assert!(request.date >= before && request.date <= after);
    }

    #[test]
    fn test_request_deserializes_with_optional_strings_omitted() {
        let json = r#"{
            "amount": "12.5",
            "accounts": [{"iban": "SK77"}],
            "currency": "EUR",
            "date": "2024-01-01"
        }"#;
        let request: PaymentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.amount, Decimal::new(125, 1));
        assert_eq!(request.accounts[0].bank_code, "");
        assert!(request.beneficiary_name.is_empty());
    }
}
