use std::fmt;

/// Amounts are plain floating-point currency values with no unit and no
/// rounding policy. Balances inherit whatever precision the arithmetic gives.
pub type Amount = f64;

/// Format an amount for display.
/// Uses the shortest round-trip form, so whole amounts print without a
/// decimal point: 150.0 -> "150", 12.5 -> "12.5".
pub fn format_amount(amount: Amount) -> String {
    // -0.0 would render as "-0" on a balance line
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{}", amount)
}

/// Parse a user-supplied amount.
/// Example: "50" -> 50.0, "12.5" -> 12.5, "-3" -> -3.0
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::InvalidFormat);
    }

    let value: Amount = input.parse().map_err(|_| ParseAmountError::InvalidFormat)?;

    // "inf" and "nan" parse as f64 but make no sense as money
    if !value.is_finite() {
        return Err(ParseAmountError::InvalidFormat);
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(150.0), "150");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(-25.75), "-25.75");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount("  100.25  "), Ok(100.25));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12,5").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("nan").is_err());
    }
}
