use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::application::ExpenseError;
use crate::domain::{parse_amount, Amount, Ledger};

/// Result of an import operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: Vec<SkippedLine>,
}

/// A non-blank line that was ignored during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not of the form `category:amount`
    Malformed,
    /// The amount part is not a usable number
    InvalidAmount,
}

/// Loads `category:amount` lines into a ledger.
///
/// The loader holds no state: the same ledger can be fed from several
/// files and amounts for a repeated category accumulate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseLoader;

impl ExpenseLoader {
    pub fn new() -> Self {
        Self
    }

    /// Import expenses from the file at `path` into `ledger`.
    ///
    /// A missing or unreadable file is an error. Bad lines are skipped.
    pub fn import_expenses(
        &self,
        ledger: &mut Ledger,
        path: impl AsRef<Path>,
    ) -> Result<ImportResult, ExpenseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ExpenseError::read(path, e))?;
        let result = self
            .import_from_reader(ledger, BufReader::new(file))
            .map_err(|e| match e {
                ExpenseError::Io(source) => ExpenseError::read(path, source),
                other => other,
            })?;

        info!(
            path = %path.display(),
            imported = result.imported,
            skipped = result.skipped.len(),
            "imported expenses"
        );
        Ok(result)
    }

    /// Import expenses from any buffered reader.
    pub fn import_from_reader<R: BufRead>(
        &self,
        ledger: &mut Ledger,
        reader: R,
    ) -> Result<ImportResult, ExpenseError> {
        let mut result = ImportResult::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line_no = line_num + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok((category, amount)) => {
                    ledger.credit(category, amount);
                    result.imported += 1;
                }
                Err(reason) => {
                    debug!(line = line_no, ?reason, "skipping expense line");
                    result.skipped.push(SkippedLine {
                        line: line_no,
                        reason,
                    });
                }
            }
        }

        Ok(result)
    }
}

fn parse_line(line: &str) -> Result<(&str, Amount), SkipReason> {
    let (category, amount) = line.split_once(':').ok_or(SkipReason::Malformed)?;
    if amount.contains(':') {
        return Err(SkipReason::Malformed);
    }

    let category = category.trim();
    if category.is_empty() {
        return Err(SkipReason::Malformed);
    }

    let amount = parse_amount(amount).map_err(|_| SkipReason::InvalidAmount)?;
    Ok((category, amount))
}
