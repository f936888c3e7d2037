use std::cmp::Ordering;
use std::collections::HashMap;

use super::{Amount, ExpenseRecord};

/// In-memory mapping from category to its running total.
///
/// Categories are case-sensitive and unique. Iteration follows insertion
/// order (first created, first iterated), which keeps sort ties and exports
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    index: HashMap<String, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.index.contains_key(category)
    }

    pub fn get(&self, category: &str) -> Option<&ExpenseRecord> {
        self.index.get(category).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, category: &str) -> Option<&mut ExpenseRecord> {
        match self.index.get(category) {
            Some(&i) => Some(&mut self.records[i]),
            None => None,
        }
    }

    /// Add `amount` to the category, creating the record if it is missing.
    pub fn credit(&mut self, category: &str, amount: Amount) -> &ExpenseRecord {
        let i = match self.index.get(category) {
            Some(&i) => {
                self.records[i].amount += amount;
                i
            }
            None => {
                let i = self.records.len();
                self.records.push(ExpenseRecord::new(category, amount));
                self.index.insert(category.to_string(), i);
                i
            }
        };
        &self.records[i]
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ExpenseRecord> {
        self.records.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.category())
    }

    /// Build a new `(category, amount)` list ordered by `key`.
    ///
    /// Ties on amount fall back to ascending category.
    pub fn sorted(&self, key: SortKey) -> Vec<(String, Amount)> {
        let mut pairs: Vec<(String, Amount)> = self.records.iter().map(|r| r.to_pair()).collect();
        match key {
            SortKey::ExpenseType => pairs.sort_by(|a, b| a.0.cmp(&b.0)),
            SortKey::Amount => pairs.sort_by(|a, b| match b.1.total_cmp(&a.1) {
                Ordering::Equal => a.0.cmp(&b.0),
                other => other,
            }),
        }
        pairs
    }
}

impl<S: AsRef<str>> FromIterator<(S, Amount)> for Ledger {
    fn from_iter<I: IntoIterator<Item = (S, Amount)>>(iter: I) -> Self {
        let mut ledger = Ledger::new();
        for (category, amount) in iter {
            ledger.credit(category.as_ref(), amount);
        }
        ledger
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by category name
    ExpenseType,
    /// Descending by amount
    Amount,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ExpenseType => "expense_type",
            SortKey::Amount => "amount",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "expense_type" => Some(SortKey::ExpenseType),
            "amount" => Some(SortKey::Amount),
            _ => None,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
