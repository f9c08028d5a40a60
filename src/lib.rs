//! This file is the root of the `pay_by_square` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`pipeline`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the public API from the `bridge`.
//! 3.  Defining the `#[pymodule]` (behind the `python` feature) which acts as the
//!     entry point when the compiled library is imported into Python.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod pipeline;
pub mod types;

#[cfg(feature = "python")]
mod ffi;

pub use bridge::{
    analyze_token, encode, encode_with_config, generate, generate_with_config, GenerateArgs,
    TokenStats,
};
pub use config::{EncoderConfig, LzmaConfig};
pub use error::PayBySquareError;
pub use types::{AccountEntry, AccountsInput, BankAccount, PaymentRequest, PaymentRequestBuilder};

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `pay_by_square` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn pay_by_square(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::python::generate_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::python::analyze_token_py, m)?)?;

    // --- Expose the custom error type ---
    m.add(
        "PayBySquareError",
        m.py().get_type_bound::<pyo3::exceptions::PyValueError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Turn on logging for the encoding stages ---
    m.add_function(wrap_pyfunction!(ffi::python::enable_verbose_logging_py, m)?)?;

    Ok(())
}
