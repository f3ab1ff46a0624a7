use super::{ZERO_AMOUNT, normalize};

use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;

fn format_currency(value: Decimal) -> String {
    let text = format!("{:.2}", value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap();

    let mut grouped = String::new();
    for (position, digit) in int_part.chars().rev().enumerate() {
        if position > 0 && position % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    format!("{sign}${int_grouped}.{frac_part}")
}

#[test]
fn test_normalize_accepts_currency_formatted_strings() -> Result<()> {
    let test_cases = vec![
        ("$1,234.56", "1234.56"),
        ("$0.01", "0.01"),
        ("$500", "500"),
        ("-$1,200.00", "-1200.00"),
        ("$-1,200.00", "-1200.00"),
        ("$12,345,678.90", "12345678.90"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(normalize(input)?, Decimal::from_str(expected)?);
    }

    Ok(())
}

#[test]
fn test_normalize_handles_minus_embedded_mid_string() -> Result<()> {
    assert_eq!(normalize("$1,200.00-")?, Decimal::from_str("-1200.00")?);
    assert_eq!(normalize("$1,2-00.00")?, Decimal::from_str("-1200.00")?);

    Ok(())
}

#[test]
fn test_normalize_passes_plain_numerics_through() -> Result<()> {
    let test_cases = vec![("10", "10"), ("-4.5", "-4.5"), ("0.00", "0"), ("  3.25  ", "3.25")];

    for (input, expected) in test_cases {
        assert_eq!(normalize(input)?, Decimal::from_str(expected)?);
    }

    Ok(())
}

#[test]
fn test_normalize_treats_blank_as_zero() -> Result<()> {
    assert!(normalize("")?.is_zero());
    assert!(normalize("   ")?.is_zero());
    assert!(normalize(ZERO_AMOUNT)?.is_zero());

    Ok(())
}

#[test]
fn test_normalize_rejects_non_numeric_residue() {
    assert!(normalize("$abc").is_err());
    assert!(normalize("twelve").is_err());
    assert!(normalize("$1.2.3").is_err());
    assert!(normalize("$").is_err());
}

#[test]
fn test_normalize_round_trips_formatted_values() -> Result<()> {
    let representative = vec!["0", "1234.56", "-987654.32", "5.00", "-0.01", "1000000.00"];

    for value in representative {
        let value = Decimal::from_str(value)?;
        assert_eq!(normalize(&format_currency(value))?, value);
    }

    Ok(())
}
