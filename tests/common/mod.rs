// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use expensebook::domain::{Amount, Ledger};
use tempfile::TempDir;

/// First sample import file. Together with `EXPENSES_2` it yields the same
/// totals as `sample_ledger`.
pub const EXPENSES_1: &str = "\
food: 5
coffee: 2.40
rent: 825.00

clothes : 20
entertainment: 100
";

pub const EXPENSES_2: &str = "\
   coffee:10
clothes: 25
entertainment: 35.62
music: 324
family: 32.45
phone
sports: lots
";

/// Helper to create a temporary directory holding named files
pub fn test_dir(files: &[(&str, &str)]) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    for (name, contents) in files {
        fs::write(temp_dir.path().join(name), contents)?;
    }
    Ok(temp_dir)
}

/// Path of `name` inside a temporary directory
pub fn path_in(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

/// Test fixture: the seven-category ledger used across the suite
pub fn sample_ledger() -> Ledger {
    [
        ("food", 5.00),
        ("coffee", 12.40),
        ("rent", 825.00),
        ("clothes", 45.00),
        ("entertainment", 135.62),
        ("music", 324.00),
        ("family", 32.45),
    ]
    .into_iter()
    .collect()
}

/// Test fixture: the small ledger used by the export examples
pub fn export_ledger() -> Ledger {
    [
        ("food", 5000.00),
        ("rent", 1000.00),
        ("coffee", 5.00),
        ("clothes", 58.92),
    ]
    .into_iter()
    .collect()
}

/// Amount stored for `category`, panicking when it is missing
pub fn amount_of(ledger: &Ledger, category: &str) -> Amount {
    ledger
        .get(category)
        .unwrap_or_else(|| panic!("missing category {category}"))
        .amount
}

/// Compare computed amounts with a small tolerance
pub fn assert_amount(expected: Amount, actual: Amount) {
    assert!(
        (expected - actual).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
