use std::fmt;

/// Expense amounts are plain real numbers. Every amount at rest in a ledger
/// is finite and non-negative.
pub type Amount = f64;

/// Format an amount with exactly two decimal places.
/// Example: 5.0 -> "5.00", 58.92 -> "58.92", 1000.0 -> "1000.00"
pub fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount)
}

/// Parse a decimal string into an amount.
/// Surrounding whitespace is ignored. Negative, NaN and infinite values are rejected.
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let amount: Amount = input
        .trim()
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat)?;
    validate_amount(amount)
}

/// Check that an amount can be stored in a ledger.
pub fn validate_amount(amount: Amount) -> Result<Amount, ParseAmountError> {
    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    if amount < 0.0 {
        return Err(ParseAmountError::Negative);
    }
    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
    NotFinite,
    Negative,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
            ParseAmountError::NotFinite => write!(f, "amount must be a finite number"),
            ParseAmountError::Negative => write!(f, "amount must not be negative"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
