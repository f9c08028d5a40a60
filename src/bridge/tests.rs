use super::*;
use crate::config::EncoderConfig;
use crate::error::PayBySquareError;
use crate::types::{AccountEntry, AccountsInput, BankAccount, PaymentRequest};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

const IBAN: &str = "SK7700000000000000000000";

/// Helper building the documented reference payment through the keyword API.
fn reference_args() -> GenerateArgs {
    let mut args = GenerateArgs::new(Decimal::ONE, IBAN);
    args.swift = "FIOZSKBAXXX".to_string();
    args.date = NaiveDate::from_ymd_opt(2024, 1, 1);
    args.variable_symbol = "11".to_string();
    args.constant_symbol = "22".to_string();
    args.specific_symbol = "33".to_string();
    args.beneficiary_name = "Foo".to_string();
    args.beneficiary_address_1 = "address 1".to_string();
    args.beneficiary_address_2 = "address 2".to_string();
    args.note = "bar".to_string();
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_payment_matches_known_token() {
        let token = generate(reference_args()).unwrap();
        assert_eq!(
            token,
            "0006M0001849H7SUS7GOA8IA90VK07VO4IFPDGTPG14F6763J24R1PVPK57Q55NEOQ2KFB8NO5J6VEDEP1C8T5\
             NLEICEKIFL47V95B57GTRG0G70MUU3A11VBKSB9IC8C0K2UQ9TI7VUD29O00"
        );
    }

    #[test]
    fn test_mixed_account_list_matches_known_token() {
        let mut args = GenerateArgs::new(
            Decimal::from_str("250.75").unwrap(),
            AccountsInput::List(vec![
                AccountEntry::Pair(vec![IBAN.to_string(), "TATRSKBX".to_string()]),
                AccountEntry::Iban("CZ6508000000192000145399".to_string()),
            ]),
        );
        args.date = NaiveDate::from_ymd_opt(2024, 1, 1);

        let token = generate(args).unwrap();
        assert_eq!(
            token,
            "0006C000AIDKMB5BP2PRPD1F5PK9U5AOTVSQGEVJKG66O5K4SDINBN73V0SORPD9JGR175HDJNTQR4CI1DGE4J\
             ILFKA762G9SPRDB248TGS8GH06PV4ST3S3EU4UBR7VG0HM000"
        );
    }

    #[test]
    fn test_generate_and_encode_agree() {
        let request = PaymentRequest::builder(
            Decimal::ONE,
            vec![BankAccount::new(IBAN, "FIOZSKBAXXX")],
        )
        .date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .variable_symbol("11")
        .constant_symbol("22")
        .specific_symbol("33")
        .note("bar")
        .beneficiary_name("Foo")
        .beneficiary_address_1("address 1")
        .beneficiary_address_2("address 2")
        .build();

        assert_eq!(encode(&request).unwrap(), generate(reference_args()).unwrap());
    }

    #[test]
    fn test_account_input_shapes_are_equivalent() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);
        let shapes = vec![
            AccountsInput::from(IBAN),
            AccountsInput::from(vec![IBAN]),
            AccountsInput::List(vec![AccountEntry::Pair(vec![IBAN.to_string(), String::new()])]),
            AccountsInput::from_pairs(vec![(IBAN, None)]),
        ];

        let tokens: Vec<String> = shapes
            .into_iter()
            .map(|shape| {
                let mut args = GenerateArgs::new(Decimal::new(4250, 2), shape);
                args.date = date;
                args.note = "rent".to_string();
                generate(args).unwrap()
            })
            .collect();

        assert!(tokens.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_swift_is_ignored_for_list_input() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);

        let mut with_swift = GenerateArgs::new(Decimal::ONE, vec![IBAN]);
        with_swift.swift = "FIOZSKBAXXX".to_string();
        with_swift.date = date;

        let mut without_swift = GenerateArgs::new(Decimal::ONE, vec![IBAN]);
        without_swift.date = date;

        assert_eq!(
            generate(with_swift).unwrap(),
            generate(without_swift).unwrap()
        );
    }

    #[test]
    fn test_generate_account_count_bounds() {
        let six = GenerateArgs::new(Decimal::ONE, vec![IBAN; 6]);
        assert!(matches!(
            generate(six),
            Err(PayBySquareError::InvalidAccountCount(6))
        ));

        let none = GenerateArgs::new(Decimal::ONE, AccountsInput::List(Vec::new()));
        assert!(matches!(
            generate(none),
            Err(PayBySquareError::InvalidAccountCount(0))
        ));

        let five = GenerateArgs::new(Decimal::ONE, vec![IBAN; 5]);
        assert!(generate(five).is_ok());
    }

    #[test]
    fn test_default_date_is_today() {
        let args = GenerateArgs::new(Decimal::ONE, IBAN);
        let before = chrono::Local::now().date_naive();
        let request = args.into_request(&EncoderConfig::default()).unwrap();
        let after = chrono::Local::now().date_naive();
        assert!(request.date >= before && request.date <= after);
    }

    #[test]
    fn test_config_supplies_default_currency() {
        let config = EncoderConfig::from_json_str(r#"{"default_currency": "CZK"}"#).unwrap();

        let request = GenerateArgs::new(Decimal::ONE, IBAN)
            .into_request(&config)
            .unwrap();
        assert_eq!(request.currency, "CZK");

        let mut explicit = GenerateArgs::new(Decimal::ONE, IBAN);
        explicit.currency = Some("USD".to_string());
        assert_eq!(explicit.into_request(&config).unwrap().currency, "USD");
    }

    #[test]
    fn test_generate_args_from_json() {
        let json = r#"{
            "amount": 12.5,
            "iban": [["SK7700000000000000000000", "FIOZSKBAXXX"]],
            "date": "2024-01-01",
            "note": "lunch"
        }"#;
        let args: GenerateArgs = serde_json::from_str(json).unwrap();
        let request = args.into_request(&EncoderConfig::default()).unwrap();

        assert_eq!(request.amount, Decimal::new(125, 1));
        assert_eq!(request.accounts, vec![BankAccount::new(IBAN, "FIOZSKBAXXX")]);
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.note, "lunch");
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let args = GenerateArgs::new(Decimal::new(-100, 2), IBAN);
        assert!(matches!(
            generate(args),
            Err(PayBySquareError::InvalidAmount(_))
        ));
    }
}
