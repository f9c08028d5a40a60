//! This module defines the core, strongly-typed data representations used
//! throughout the encoder.
//!
//! It includes the `PaymentRequest` handed to the pipeline and the
//! `AccountsInput` shapes accepted at the API boundary.

pub mod accounts;
pub mod payment;

// Re-export the main type(s) for easier access.
pub use accounts::{AccountEntry, AccountsInput};
pub use payment::{BankAccount, PaymentRequest, PaymentRequestBuilder, MAX_ACCOUNTS};
