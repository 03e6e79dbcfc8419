use rust_decimal::Decimal;

use crate::ParseError;

/// Parses a decimal-string token exactly.
///
/// Plain (`"12.50"`) and scientific (`"1.5e3"`) notation are accepted.
/// `_` digit separators are rejected.
///
/// Precision is bounded by `Decimal`: 96-bit mantissa, at most 28 fractional
/// digits, roughly 28-29 significant digits overall. Tokens that would need
/// rounding to fit are rejected rather than rounded.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, ParseError> {
    let invalid = || ParseError::Decimal {
        field,
        value: value.to_owned(),
    };

    if value.contains('_') {
        return Err(invalid());
    }

    let parsed = if value.contains(['e', 'E']) {
        Decimal::from_scientific(value)
    } else {
        Decimal::from_str_exact(value)
    };

    parsed.map_err(|_| invalid())
}
