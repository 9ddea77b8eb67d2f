use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::error::{ChartError, ChartResult};

/// Short month/day pattern used for time-axis labels ("Mar 17").
pub const DEFAULT_TIME_LABEL_PATTERN: &str = "%b %-d";

const VALUE_LABEL_DECIMALS: usize = 2;
const INTEGRAL_EPSILON: f64 = 1e-9;

/// Formats a value-axis level.
///
/// Integral levels print without a fraction (`"20"`), others keep up to two
/// decimals with trailing zeros trimmed (`"12.5"`).
#[must_use]
pub fn format_value_label(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() <= INTEGRAL_EPSILON * value.abs().max(1.0) && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }

    let text = format!("{:.*}", VALUE_LABEL_DECIMALS, value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

/// Formats an epoch-millisecond timestamp in UTC with a strftime pattern.
#[must_use]
pub fn format_time_label(timestamp_ms: i64, pattern: &str) -> String {
    let Some(time) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return timestamp_ms.to_string();
    };

    let mut out = String::new();
    if write!(out, "{}", time.format(pattern)).is_err() {
        return timestamp_ms.to_string();
    }
    out
}

/// Rejects strftime patterns chrono cannot render.
pub fn validate_time_label_pattern(pattern: &str) -> ChartResult<()> {
    if pattern.is_empty() {
        return Err(ChartError::InvalidData(
            "time label pattern must not be empty".to_owned(),
        ));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "time label pattern `{pattern}` is not a valid strftime pattern"
        )));
    }
    Ok(())
}
