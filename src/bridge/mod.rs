// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the library. It resolves the
// conveniences callers expect (account shapes, today's date, default currency)
// and hands a fully explicit `PaymentRequest` to the pure `pipeline` engine.
//
// Data Flow:
//
//   1. [generate(GenerateArgs)]          -> keyword-style arguments
//         |
//         `-> a. AccountsInput::normalize  -> Vec<BankAccount>
//         |
//         `-> b. defaults resolved now     -> PaymentRequest
//
//   2. [encode(&PaymentRequest)]         -> explicit request, no clock access
//         |
//         `-> pipeline::orchestrator::encode_payment(request, &LzmaConfig)
//
//   3. [analyze_token(&str)]             -> TokenStats from the staged header
//
// ====================================================================================
pub mod format;
pub mod stateless_api;

pub use format::TokenStats;
pub use stateless_api::{
    analyze_token, encode, encode_with_config, generate, generate_with_config, GenerateArgs,
};

#[cfg(test)]
mod tests;
