use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse an input size, ignoring `_` digit separators (`20_000`).
///
/// # Errors
/// Returns an error if what remains is not a valid `usize`.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let digits = s.trim().replace('_', "");
    if digits.is_empty() {
        return Err(format!("invalid size '{s}'"));
    }
    parse_bounded_number(&digits, 0, None)
}
