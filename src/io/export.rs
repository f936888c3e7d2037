use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::application::ExpenseError;
use crate::domain::{format_amount, Amount, ExpenseRecord, Ledger};

/// Write one `<category>: <amount>` line per ledger record whose category is
/// listed in `categories`.
///
/// Iteration is over the ledger, so output follows ledger order and a
/// category requested twice is still written once. Requested categories the
/// ledger does not know are ignored.
pub fn write_expenses<W: Write, S: AsRef<str>>(
    ledger: &Ledger,
    categories: &[S],
    mut writer: W,
) -> std::io::Result<usize> {
    let mut count = 0;
    for record in ledger.iter() {
        if categories.iter().any(|c| c.as_ref() == record.category()) {
            writeln!(writer, "{}", record)?;
            count += 1;
        }
    }
    writer.flush()?;
    Ok(count)
}

/// Export the selected categories to `path`, replacing any previous content.
pub fn export_expenses_to_file<S: AsRef<str>>(
    ledger: &Ledger,
    categories: &[S],
    path: impl AsRef<Path>,
) -> Result<usize, ExpenseError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ExpenseError::write(path, e))?;
    let count = write_expenses(ledger, categories, BufWriter::new(file))
        .map_err(|e| ExpenseError::write(path, e))?;

    info!(path = %path.display(), count, "exported expenses");
    Ok(count)
}

/// Write a sorted listing as an aligned table
pub fn write_report_table<W: Write>(entries: &[(String, Amount)], mut writer: W) -> Result<usize> {
    if entries.is_empty() {
        writeln!(writer, "No expenses found.")?;
        return Ok(0);
    }

    writeln!(writer, "{:<20} {:>12}", "EXPENSE TYPE", "AMOUNT")?;
    writeln!(writer, "{}", "-".repeat(33))?;
    for (category, amount) in entries {
        writeln!(writer, "{:<20} {:>12}", category, format_amount(*amount))?;
    }
    writer.flush()?;
    Ok(entries.len())
}

/// Write a sorted listing to CSV format
pub fn write_report_csv<W: Write>(entries: &[(String, Amount)], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Write header
    csv_writer.write_record(["expense_type", "amount"])?;

    for (category, amount) in entries {
        csv_writer.write_record([category.as_str(), format_amount(*amount).as_str()])?;
    }

    csv_writer.flush()?;
    Ok(entries.len())
}

/// Write a sorted listing as a JSON array of records
pub fn write_report_json<W: Write>(entries: &[(String, Amount)], mut writer: W) -> Result<usize> {
    let records: Vec<ExpenseRecord> = entries.iter().cloned().map(ExpenseRecord::from).collect();

    let json = serde_json::to_string_pretty(&records)?;
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(records.len())
}
