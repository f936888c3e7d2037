use serde::{Deserialize, Serialize};

use super::{format_amount, Amount};

/// Running total for a single expense category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    category: String,
    pub amount: Amount,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, amount: Amount) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// The category is fixed once the record exists.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn to_pair(&self) -> (String, Amount) {
        (self.category.clone(), self.amount)
    }
}

impl From<(String, Amount)> for ExpenseRecord {
    fn from((category, amount): (String, Amount)) -> Self {
        Self::new(category, amount)
    }
}

/// Renders as `<category>: <amount>` with two decimals, the same shape as an export line.
impl std::fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category, format_amount(self.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ExpenseRecord::new("coffee", 12.4).to_string(), "coffee: 12.40");
        assert_eq!(ExpenseRecord::new("rent", 1000.0).to_string(), "rent: 1000.00");
    }

    #[test]
    fn test_serializes_category_and_amount() {
        let json = serde_json::to_value(ExpenseRecord::new("food", 5.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "category": "food", "amount": 5.0 }));
    }
}
