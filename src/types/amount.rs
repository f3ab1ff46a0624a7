use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::errors::AmountError;

/// Literal substituted for a blank amount field before parsing.
pub const ZERO_AMOUNT: &str = "$0.00";

const CURRENCY_GLYPH: char = '$';
const THOUSANDS_SEPARATOR: char = ',';

/// Converts a raw CSV amount field into a signed decimal value.
///
/// Plain numeric fields pass through unchanged. Currency-tagged fields have
/// the `$` glyph and all thousands separators stripped; a minus sign anywhere
/// in the residue negates the absolute magnitude, so an export that embeds
/// the sign mid-string (`$-1,200.00`) parses the same as a leading minus.
///
/// # Errors
/// Returns `AmountError::Unparseable` when the residue left after stripping
/// the currency glyph, separators, and sign is not a decimal numeral.
pub fn normalize(raw: &str) -> Result<Decimal, AmountError> {
    let field = match raw.trim() {
        "" => ZERO_AMOUNT,
        trimmed => trimmed,
    };

    if let Ok(value) = Decimal::from_str(field) {
        return Ok(value);
    }

    let residue: String = field
        .chars()
        .filter(|c| *c != CURRENCY_GLYPH && *c != THOUSANDS_SEPARATOR)
        .collect();
    let negative = residue.contains('-');
    let digits: String = residue.chars().filter(|c| *c != '-').collect();

    let magnitude = Decimal::from_str(digits.trim())
        .map_err(|_| AmountError::Unparseable(raw.to_string()))?
        .abs();

    Ok(if negative { -magnitude } else { magnitude })
}
