use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};

/// Parses a YYYY-MM-DD date argument.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{value}', expected YYYY-MM-DD"))
}

/// Parses an optional date argument, defaulting to today.
pub fn parse_date_or_today(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(value) => parse_date(value),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parses a decimal currency amount ("9.99", "$12") into minor units.
pub fn parse_amount_cents(value: &str) -> Result<i64> {
    let trimmed = value.trim().trim_start_matches('$');
    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };
    if whole.starts_with('-') {
        return Err(anyhow!("amounts cannot be negative, got '{value}'"));
    }
    if frac.len() > 2 {
        return Err(anyhow!(
            "amounts support at most two decimal places, got '{value}'"
        ));
    }
    let whole: i64 = whole
        .parse()
        .with_context(|| format!("invalid amount '{value}'"))?;
    let frac: i64 = if frac.is_empty() {
        0
    } else {
        format!("{frac:0<2}")
            .parse()
            .with_context(|| format!("invalid amount '{value}'"))?
    };
    Ok(whole * 100 + frac)
}

/// Formats minor currency units as a dollar amount.
pub fn format_cents(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_amounts_into_cents() {
        assert_eq!(parse_amount_cents("9.99").unwrap(), 999);
        assert_eq!(parse_amount_cents("$12").unwrap(), 1200);
        assert_eq!(parse_amount_cents("0.5").unwrap(), 50);
        assert_eq!(parse_amount_cents("120").unwrap(), 12_000);
    }

    #[test]
    fn rejects_bad_amounts() {
        assert!(parse_amount_cents("abc").is_err());
        assert!(parse_amount_cents("9.999").is_err());
        assert!(parse_amount_cents("-5").is_err());
    }

    #[test]
    fn formats_cents_as_dollars() {
        assert_eq!(format_cents(11_988), "$119.88");
        assert_eq!(format_cents(50), "$0.50");
    }

    #[test]
    fn parses_dates() {
        assert_eq!(
            parse_date("2025-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
        );
        assert!(parse_date("15/03/2025").is_err());
    }
}
