//! Accepted shapes for the account list, and their normalization into the
//! canonical ordered sequence of `BankAccount`s.
//!
//! Callers may pass a single IBAN (paired with a separately supplied bank
//! code), a list of IBANs, or a list of `[iban]` / `[iban, bank_code]`
//! entries. The two list forms may be mixed. Whenever a list is used, the
//! separately supplied bank code is ignored.

use serde::{Deserialize, Serialize};

use crate::error::PayBySquareError;
use crate::types::payment::{BankAccount, MAX_ACCOUNTS};

/// One element of a list-form account input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AccountEntry {
    /// A bare IBAN; its bank code is empty.
    Iban(String),
    /// `[iban]` or `[iban, bank_code]`.
    Pair(Vec<String>),
}

/// The account argument of the stateless API, in any of its accepted shapes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AccountsInput {
    Single(String),
    List(Vec<AccountEntry>),
}

impl AccountsInput {
    /// A list of bare IBANs.
    pub fn from_ibans<I, S>(ibans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AccountsInput::List(
            ibans
                .into_iter()
                .map(|iban| AccountEntry::Iban(iban.into()))
                .collect(),
        )
    }

    /// A list of `(iban, optional bank code)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<S>)>,
        S: Into<String>,
    {
        AccountsInput::List(
            pairs
                .into_iter()
                .map(|(iban, code)| {
                    let mut entry = vec![iban.into()];
                    entry.extend(code.map(Into::into));
                    AccountEntry::Pair(entry)
                })
                .collect(),
        )
    }

    /// Resolves the input into the canonical account sequence.
    ///
    /// `bank_code` only applies to the `Single` shape.
    pub fn normalize(self, bank_code: &str) -> Result<Vec<BankAccount>, PayBySquareError> {
        let entries = match self {
            AccountsInput::Single(iban) => return Ok(vec![BankAccount::new(iban, bank_code)]),
            AccountsInput::List(entries) => entries,
        };

        if entries.is_empty() || entries.len() > MAX_ACCOUNTS {
            return Err(PayBySquareError::InvalidAccountCount(entries.len()));
        }

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                AccountEntry::Iban(iban) => Ok(BankAccount::new(iban, "")),
                AccountEntry::Pair(parts) => pair_to_account(index, parts),
            })
            .collect()
    }
}

fn pair_to_account(index: usize, parts: Vec<String>) -> Result<BankAccount, PayBySquareError> {
    let count = parts.len();
    let mut parts = parts.into_iter();
    match (parts.next(), parts.next(), count) {
        (Some(iban), None, 1) => Ok(BankAccount::new(iban, "")),
        (Some(iban), Some(code), 2) => Ok(BankAccount::new(iban, code)),
        _ => Err(PayBySquareError::InvalidAccountEntry(format!(
            "entry {} has {} elements, expected [iban] or [iban, bank_code]",
            index, count
        ))),
    }
}

impl From<&str> for AccountsInput {
    fn from(iban: &str) -> Self {
        AccountsInput::Single(iban.to_string())
    }
}

impl From<String> for AccountsInput {
    fn from(iban: String) -> Self {
        AccountsInput::Single(iban)
    }
}

impl From<Vec<String>> for AccountsInput {
    fn from(ibans: Vec<String>) -> Self {
        AccountsInput::from_ibans(ibans)
    }
}

impl From<Vec<&str>> for AccountsInput {
    fn from(ibans: Vec<&str>) -> Self {
        AccountsInput::from_ibans(ibans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IBAN: &str = "SK7700000000000000000000";

    #[test]
    fn test_single_uses_supplied_bank_code() {
        let accounts = AccountsInput::from(IBAN).normalize("FIOZSKBAXXX").unwrap();
        assert_eq!(accounts, vec![BankAccount::new(IBAN, "FIOZSKBAXXX")]);
    }

    #[test]
    fn test_list_ignores_supplied_bank_code() {
        let accounts = AccountsInput::from(vec![IBAN, "CZ6508000000192000145399"])
            .normalize("FIOZSKBAXXX")
            .unwrap();
        assert_eq!(accounts.len(), 2);
        assert!(accounts.iter().all(|a| a.bank_code.is_empty()));
        assert_eq!(accounts[1].iban, "CZ6508000000192000145399");
    }

    #[test]
    fn test_pairs_keep_their_own_codes_in_order() {
        let accounts = AccountsInput::from_pairs(vec![
            (IBAN, Some("FIOZSKBAXXX")),
            ("CZ6508000000192000145399", None),
        ])
        .normalize("IGNORED")
        .unwrap();
        assert_eq!(
            accounts,
            vec![
                BankAccount::new(IBAN, "FIOZSKBAXXX"),
                BankAccount::new("CZ6508000000192000145399", ""),
            ]
        );
    }

    #[test]
    fn test_mixed_list_is_accepted() {
        let input = AccountsInput::List(vec![
            AccountEntry::Iban(IBAN.to_string()),
            AccountEntry::Pair(vec![IBAN.to_string(), "GIBASKBX".to_string()]),
        ]);
        let accounts = input.normalize("").unwrap();
        assert_eq!(accounts[0].bank_code, "");
        assert_eq!(accounts[1].bank_code, "GIBASKBX");
    }

    #[test]
    fn test_list_count_bounds() {
        let six = AccountsInput::from_ibans(vec![IBAN; 6]);
        assert!(matches!(
            six.normalize(""),
            Err(PayBySquareError::InvalidAccountCount(6))
        ));

        let empty = AccountsInput::List(Vec::new());
        assert!(matches!(
            empty.normalize(""),
            Err(PayBySquareError::InvalidAccountCount(0))
        ));

        let five = AccountsInput::from_ibans(vec![IBAN; 5]);
        assert_eq!(five.normalize("").unwrap().len(), 5);
    }

    #[test]
    fn test_oversized_or_empty_pair_is_rejected() {
        let triple = AccountsInput::List(vec![AccountEntry::Pair(vec![
            IBAN.to_string(),
            "FIOZSKBAXXX".to_string(),
            "extra".to_string(),
        ])]);
        assert!(matches!(
            triple.normalize(""),
            Err(PayBySquareError::InvalidAccountEntry(_))
        ));

        let empty_pair = AccountsInput::List(vec![AccountEntry::Pair(Vec::new())]);
        assert!(empty_pair.normalize("").is_err());
    }

    #[test]
    fn test_deserializes_all_three_json_shapes() {
        let single: AccountsInput = serde_json::from_str(r#""SK77""#).unwrap();
        assert_eq!(single, AccountsInput::Single("SK77".into()));

        let list: AccountsInput = serde_json::from_str(r#"["SK77", "CZ65"]"#).unwrap();
        assert_eq!(list, AccountsInput::from_ibans(vec!["SK77", "CZ65"]));

        let pairs: AccountsInput = serde_json::from_str(r#"[["SK77", "FIOZSKBAXXX"], ["CZ65"]]"#).unwrap();
        assert_eq!(
            pairs,
            AccountsInput::from_pairs(vec![("SK77", Some("FIOZSKBAXXX")), ("CZ65", None)])
        );
    }
}
