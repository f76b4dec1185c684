use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// A contribution of 25.00 units is stored as 2500 cents.
pub type Cents = i64;

/// Format cents as a human-readable amount string.
/// Example: 2500 -> "25.00", 1 -> "0.01"
pub fn format_cents(cents: Cents) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

/// Parse a decimal string into cents.
/// Example: "25.00" -> 2500, "12.5" -> 1250, "100" -> 10000
///
/// Committee amounts are never negative, so a leading minus is rejected
/// rather than parsed.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err(ParseCentsError::NegativeAmount);
    }

    // A bare units string like "25" is allowed; so is a leading dot as in ".50".
    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimal)) => {
            if decimal.contains('.') {
                return Err(ParseCentsError::InvalidFormat);
            }
            (units, decimal)
        }
        None => (input, ""),
    };

    let units: i64 = if units_str.is_empty() && !decimal_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?
    };

    // Pad or truncate the decimal part to 2 digits.
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => {
            decimal_str
                .parse::<i64>()
                .map_err(|_| ParseCentsError::InvalidFormat)?
                * 10
        }
        _ => decimal_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    Ok(units * 100 + decimal_cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    NegativeAmount,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::NegativeAmount => write!(f, "amount cannot be negative"),
        }
    }
}

impl std::error::Error for ParseCentsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(2500), "25.00");
        assert_eq!(format_cents(1234), "12.34");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(300000), "3000.00");
    }

    #[test]
    fn test_parse_cents() {
        assert_eq!(parse_cents("25.00"), Ok(2500));
        assert_eq!(parse_cents("25"), Ok(2500));
        assert_eq!(parse_cents("12.34"), Ok(1234));
        assert_eq!(parse_cents("12.5"), Ok(1250));
        assert_eq!(parse_cents("0.01"), Ok(1));
        assert_eq!(parse_cents(".50"), Ok(50));
        assert_eq!(parse_cents("  10 "), Ok(1000));
        assert_eq!(parse_cents("100.999"), Ok(10099)); // Truncates
    }

    #[test]
    fn test_parse_cents_rejects_negative() {
        assert_eq!(parse_cents("-25.00"), Err(ParseCentsError::NegativeAmount));
        assert_eq!(parse_cents("-1"), Err(ParseCentsError::NegativeAmount));
    }

    #[test]
    fn test_parse_cents_invalid() {
        assert!(parse_cents("abc").is_err());
        assert!(parse_cents("12.34.56").is_err());
        assert!(parse_cents("12,34").is_err());
        assert!(parse_cents("").is_err());
    }
}
