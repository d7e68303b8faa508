use alloc::{format, string::String};

/// Renders a result for display: integral values without a fractional part,
/// everything else in Rust's general float notation (`0.5`, `1e-7`, `NaN`).
pub fn format_result(value: f64) -> String {
    let truncated = value as i64;
    if value == truncated as f64 {
        format!("{}", truncated)
    } else {
        format!("{:?}", value)
    }
}
