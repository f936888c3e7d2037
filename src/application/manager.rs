use std::io::{Stdout, Write};
use std::path::Path;

use tracing::warn;

use crate::domain::{validate_amount, Amount, ExpenseRecord, Ledger, SortKey};
use crate::io::export_expenses_to_file;

use super::ExpenseError;

/// Query and mutation operations over a caller-owned [`Ledger`].
///
/// The manager keeps no ledger state. Its only field is the sink that
/// receives user-facing notices and the records printed after a change.
/// Missing categories and unknown sort keys produce a notice and `Ok(None)`;
/// an overdraft is the one operation-level failure and comes back as
/// [`ExpenseError::Overdraft`].
pub struct ExpenseManager<W: Write> {
    out: W,
}

impl ExpenseManager<Stdout> {
    /// Manager printing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ExpenseManager<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Look up a category.
    pub fn get_expense<'l>(
        &mut self,
        ledger: &'l Ledger,
        category: &str,
    ) -> Result<Option<&'l ExpenseRecord>, ExpenseError> {
        match ledger.get(category) {
            Some(record) => Ok(Some(record)),
            None => {
                self.not_found(category)?;
                Ok(None)
            }
        }
    }

    /// Add `value` to a category, creating it when missing.
    /// Returns the resulting amount.
    pub fn add_expense(
        &mut self,
        ledger: &mut Ledger,
        category: &str,
        value: Amount,
    ) -> Result<Amount, ExpenseError> {
        let value = checked(value)?;
        let record = ledger.credit(category, value);
        writeln!(self.out, "{}", record)?;
        Ok(record.amount)
    }

    /// Deduct `value` from an existing category.
    /// Returns the remaining amount, or `None` if the category does not exist.
    pub fn deduct_expense(
        &mut self,
        ledger: &mut Ledger,
        category: &str,
        value: Amount,
    ) -> Result<Option<Amount>, ExpenseError> {
        let value = checked(value)?;
        let Some(record) = ledger.get_mut(category) else {
            self.not_found(category)?;
            return Ok(None);
        };

        if value > record.amount {
            warn!(category, amount = record.amount, requested = value, "deduction refused");
            return Err(ExpenseError::Overdraft {
                category: category.to_string(),
                amount: record.amount,
                requested: value,
            });
        }

        record.amount -= value;
        writeln!(self.out, "{}", record)?;
        Ok(Some(record.amount))
    }

    /// Replace the amount of an existing category.
    /// Returns the new amount, or `None` if the category does not exist.
    pub fn update_expense(
        &mut self,
        ledger: &mut Ledger,
        category: &str,
        value: Amount,
    ) -> Result<Option<Amount>, ExpenseError> {
        let value = checked(value)?;
        let Some(record) = ledger.get_mut(category) else {
            self.not_found(category)?;
            return Ok(None);
        };

        record.amount = value;
        writeln!(self.out, "{}", record)?;
        Ok(Some(record.amount))
    }

    /// List `(category, amount)` pairs ordered by `sorting`, which is matched
    /// case-insensitively against `expense_type` and `amount`.
    pub fn sort_expenses(
        &mut self,
        ledger: &Ledger,
        sorting: &str,
    ) -> Result<Option<Vec<(String, Amount)>>, ExpenseError> {
        match SortKey::from_str(sorting) {
            Some(key) => Ok(Some(ledger.sorted(key))),
            None => {
                writeln!(self.out, "Invalid sort type: {}", sorting)?;
                Ok(None)
            }
        }
    }

    /// Export the listed categories to `path`, overwriting the file.
    /// Returns the number of lines written.
    pub fn export_expenses<S: AsRef<str>>(
        &mut self,
        ledger: &Ledger,
        categories: &[S],
        path: impl AsRef<Path>,
    ) -> Result<usize, ExpenseError> {
        export_expenses_to_file(ledger, categories, path)
    }

    /// Export every category, producing a file that imports back to the same ledger.
    pub fn export_all(
        &mut self,
        ledger: &Ledger,
        path: impl AsRef<Path>,
    ) -> Result<usize, ExpenseError> {
        let categories: Vec<&str> = ledger.categories().collect();
        export_expenses_to_file(ledger, &categories, path)
    }

    fn not_found(&mut self, category: &str) -> Result<(), ExpenseError> {
        writeln!(self.out, "The given expense type ({}) doesn't exist", category)?;
        Ok(())
    }
}

fn checked(value: Amount) -> Result<Amount, ExpenseError> {
    validate_amount(value).map_err(|e| ExpenseError::InvalidAmount(format!("{}: {}", value, e)))
}
