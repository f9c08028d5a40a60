//! This module provides observability hooks for the encoding pipeline.
//!
//! The `log_metric!` macro emits one structured key-value line per event
//! through the `log` facade at debug level. It is compiled out of release
//! builds, so the stage measurements cost nothing in production.

/// Logs a structured key-value metric string at debug level, only in debug builds.
///
/// # Example
/// ```ignore
/// let len = 42;
/// log_metric!("event"="stage_complete", "stage"="record", "bytes"=&len);
/// ```
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::debug!("PAYBYSQUARE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
