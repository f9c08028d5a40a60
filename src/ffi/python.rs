// In: src/ffi/python.rs

use chrono::NaiveDate;
use log::LevelFilter;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use rust_decimal::Decimal;
use std::fs::OpenOptions;
use std::sync::Once;

use crate::bridge::{self, GenerateArgs};
use crate::error::PayBySquareError;
use crate::pipeline::record;
use crate::types::{AccountEntry, AccountsInput};

//==================================================================================
// I. Argument Marshalling
//==================================================================================

/// Accepts Python `int`, `float` and anything implementing `__float__`.
fn extract_amount(amount: &Bound<'_, PyAny>) -> Result<Decimal, PayBySquareError> {
    if let Ok(whole) = amount.extract::<i64>() {
        return Ok(Decimal::from(whole));
    }
    let value: f64 = amount.extract()?;
    record::amount_from_f64(value)
}

/// Accepts `str`, `list[str]`, `list[list[str]]`, or a mix of the two list forms.
fn extract_accounts(iban: &Bound<'_, PyAny>) -> Result<AccountsInput, PayBySquareError> {
    if let Ok(single) = iban.extract::<String>() {
        return Ok(AccountsInput::Single(single));
    }
    let list = iban.downcast::<PyList>().map_err(|_| {
        PayBySquareError::InvalidAccountEntry("iban must be a string or a list".to_string())
    })?;

    let entries = list
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if let Ok(single) = entry.extract::<String>() {
                return Ok(AccountEntry::Iban(single));
            }
            match entry.downcast::<PyList>() {
                Ok(parts) => Ok(AccountEntry::Pair(parts.extract::<Vec<String>>()?)),
                Err(_) => Err(PayBySquareError::InvalidAccountEntry(format!(
                    "entry {} must be a string or a list of strings",
                    index
                ))),
            }
        })
        .collect::<Result<Vec<_>, PayBySquareError>>()?;

    Ok(AccountsInput::List(entries))
}

//==================================================================================
// II. Stateless Functions
//==================================================================================

/// Generates a pay-by-square token. Keyword-only, like the reference API.
#[pyfunction]
#[pyo3(name = "generate", signature = (
    *,
    amount,
    iban,
    swift = String::new(),
    date = None,
    beneficiary_name = String::new(),
    currency = "EUR".to_string(),
    variable_symbol = String::new(),
    constant_symbol = String::new(),
    specific_symbol = String::new(),
    note = String::new(),
    beneficiary_address_1 = String::new(),
    beneficiary_address_2 = String::new()
))]
#[allow(clippy::too_many_arguments)]
pub fn generate_py(
    py: Python<'_>,
    amount: &Bound<'_, PyAny>,
    iban: &Bound<'_, PyAny>,
    swift: String,
    date: Option<NaiveDate>,
    beneficiary_name: String,
    currency: String,
    variable_symbol: String,
    constant_symbol: String,
    specific_symbol: String,
    note: String,
    beneficiary_address_1: String,
    beneficiary_address_2: String,
) -> PyResult<String> {
    let args = GenerateArgs {
        amount: extract_amount(amount)?,
        iban: extract_accounts(iban)?,
        swift,
        date,
        currency: Some(currency),
        variable_symbol,
        constant_symbol,
        specific_symbol,
        note,
        beneficiary_name,
        beneficiary_address_1,
        beneficiary_address_2,
    };
    let token = py.allow_threads(move || bridge::generate(args))?;
    Ok(token)
}

/// Reads the staged header of a token without decompressing it.
#[pyfunction]
#[pyo3(name = "analyze_token")]
pub fn analyze_token_py<'py>(py: Python<'py>, token: &str) -> PyResult<Bound<'py, PyDict>> {
    let stats = bridge::analyze_token(token)?;

    let result_dict = PyDict::new_bound(py);
    result_dict.set_item("token_len", stats.token_len)?;
    result_dict.set_item("staged_len", stats.staged_len)?;
    result_dict.set_item("marker", stats.marker.to_vec())?;
    result_dict.set_item("payload_len", stats.payload_len)?;
    result_dict.set_item("compressed_len", stats.compressed_len)?;
    Ok(result_dict)
}

//==================================================================================
// III. Logging
//==================================================================================

static INIT_LOGGER: Once = Once::new();

/// Routes the encoder's log output (including per-stage metrics) to stderr or a file.
#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    let target = match log_file {
        Some(filename) => Some(
            OpenOptions::new()
                .append(true)
                .create(true)
                .open(filename)
                .map_err(PayBySquareError::from)?,
        ),
        None => None,
    };

    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Debug);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(file) = target {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        let _ = builder.try_init();
    });
    Ok(())
}
