mod common;

use anyhow::Result;
use common::{amount_of, assert_amount, path_in, test_dir, EXPENSES_1, EXPENSES_2};
use expensebook::domain::Ledger;
use expensebook::io::{ExpenseLoader, SkipReason};
use expensebook::ExpenseError;

#[test]
fn test_import_two_files_accumulates() -> Result<()> {
    let dir = test_dir(&[("expenses.txt", EXPENSES_1), ("expenses_2.txt", EXPENSES_2)])?;
    let loader = ExpenseLoader::new();
    let mut ledger = Ledger::new();

    loader.import_expenses(&mut ledger, path_in(&dir, "expenses.txt"))?;
    loader.import_expenses(&mut ledger, path_in(&dir, "expenses_2.txt"))?;

    assert_amount(45.0, amount_of(&ledger, "clothes"));
    assert_amount(12.40, amount_of(&ledger, "coffee"));
    assert_amount(135.62, amount_of(&ledger, "entertainment"));
    assert_amount(825.0, amount_of(&ledger, "rent"));
    assert_eq!(ledger.len(), 7);

    Ok(())
}

#[test]
fn test_import_ignores_bad_lines() -> Result<()> {
    let dir = test_dir(&[("expenses_2.txt", EXPENSES_2)])?;
    let mut ledger = Ledger::new();

    let result = ExpenseLoader::new().import_expenses(&mut ledger, path_in(&dir, "expenses_2.txt"))?;

    assert_eq!(result.imported, 5);
    assert_eq!(result.skipped.len(), 2);
    assert_eq!(result.skipped[0].line, 6);
    assert_eq!(result.skipped[0].reason, SkipReason::Malformed);
    assert_eq!(result.skipped[1].line, 7);
    assert_eq!(result.skipped[1].reason, SkipReason::InvalidAmount);
    assert!(!ledger.contains("phone"));
    assert!(!ledger.contains("sports"));

    Ok(())
}

#[test]
fn test_import_is_case_sensitive() -> Result<()> {
    let dir = test_dir(&[("mixed.txt", "coffee: 1\nCoffee: 2\ncoffee: 3\n")])?;
    let mut ledger = Ledger::new();

    ExpenseLoader::new().import_expenses(&mut ledger, path_in(&dir, "mixed.txt"))?;

    assert_amount(4.0, amount_of(&ledger, "coffee"));
    assert_amount(2.0, amount_of(&ledger, "Coffee"));

    Ok(())
}

#[test]
fn test_import_merges_into_existing_ledger() -> Result<()> {
    let dir = test_dir(&[("more.txt", "food: 10\nbooks: 7.5\n")])?;
    let mut ledger: Ledger = [("food", 5.0)].into_iter().collect();

    ExpenseLoader::new().import_expenses(&mut ledger, path_in(&dir, "more.txt"))?;

    assert_amount(15.0, amount_of(&ledger, "food"));
    assert_amount(7.5, amount_of(&ledger, "books"));
    let categories: Vec<&str> = ledger.categories().collect();
    assert_eq!(categories, vec!["food", "books"]);

    Ok(())
}

#[test]
fn test_import_missing_file_fails() -> Result<()> {
    let dir = test_dir(&[])?;
    let mut ledger = Ledger::new();

    let result = ExpenseLoader::new().import_expenses(&mut ledger, path_in(&dir, "nope.txt"));

    assert!(matches!(result, Err(ExpenseError::FileNotFound(_))));
    assert!(ledger.is_empty());

    Ok(())
}

#[test]
fn test_import_empty_file() -> Result<()> {
    let dir = test_dir(&[("empty.txt", "\n\n   \n")])?;
    let mut ledger = Ledger::new();

    let result = ExpenseLoader::new().import_expenses(&mut ledger, path_in(&dir, "empty.txt"))?;

    assert_eq!(result.imported, 0);
    assert!(result.skipped.is_empty());
    assert!(ledger.is_empty());

    Ok(())
}
