use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::application::ExpenseManager;
use crate::domain::{parse_amount, Amount, Ledger};
use crate::io::{write_report_csv, write_report_json, write_report_table, ExpenseLoader};

/// Expensebook - Categorized Expense Ledger
#[derive(Parser)]
#[command(name = "expensebook")]
#[command(about = "Track expenses by category, loaded from plain `category:amount` files")]
#[command(version)]
pub struct Cli {
    /// Expense file to import before running the command (repeatable, imported in order)
    #[arg(short, long = "file", env = "EXPENSEBOOK_FILES", value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Write the whole ledger to this file after the command
    #[arg(long, env = "EXPENSEBOOK_SAVE")]
    pub save: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every expense type in the ledger
    List,

    /// Show the amount for an expense type
    Get {
        /// Expense type (case-sensitive)
        expense_type: String,
    },

    /// Add to an expense type, creating it if needed
    Add {
        /// Expense type (case-sensitive)
        expense_type: String,

        /// Amount to add (e.g., "12.40" or "12")
        amount: String,
    },

    /// Deduct from an existing expense type
    Deduct {
        /// Expense type (case-sensitive)
        expense_type: String,

        /// Amount to deduct
        amount: String,
    },

    /// Replace the amount of an existing expense type
    Update {
        /// Expense type (case-sensitive)
        expense_type: String,

        /// New amount
        amount: String,
    },

    /// Show the ledger sorted by expense type or amount
    Sort {
        /// Sort key: expense_type, amount
        key: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
    },

    /// Export selected expense types to a file (overwrites it)
    Export {
        /// Output file
        output: PathBuf,

        /// Expense types to export
        #[arg(required = true)]
        expense_types: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Csv,
    Json,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut ledger = Ledger::new();
        let loader = ExpenseLoader::new();
        for path in &self.files {
            let result = loader
                .import_expenses(&mut ledger, path)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            debug!(
                path = %path.display(),
                imported = result.imported,
                skipped = result.skipped.len(),
                "loaded expense file"
            );
        }

        let mut manager = ExpenseManager::stdout();
        run_command(&mut manager, &mut ledger, self.command)?;

        if let Some(path) = &self.save {
            let count = manager
                .export_all(&ledger, path)
                .with_context(|| format!("Failed to save ledger to {}", path.display()))?;
            println!("Saved {} expense types to {}", count, path.display());
        }

        Ok(())
    }
}

fn run_command<W: Write>(
    manager: &mut ExpenseManager<W>,
    ledger: &mut Ledger,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::List => {
            if ledger.is_empty() {
                println!("No expenses found.");
            } else {
                for record in ledger.iter() {
                    println!("{}", record);
                }
            }
        }

        Commands::Get { expense_type } => {
            if let Some(record) = manager.get_expense(ledger, &expense_type)? {
                println!("{}", record);
            }
        }

        Commands::Add {
            expense_type,
            amount,
        } => {
            manager.add_expense(ledger, &expense_type, parse_amount_arg(&amount)?)?;
        }

        Commands::Deduct {
            expense_type,
            amount,
        } => {
            manager
                .deduct_expense(ledger, &expense_type, parse_amount_arg(&amount)?)
                .context("Deduction failed")?;
        }

        Commands::Update {
            expense_type,
            amount,
        } => {
            manager.update_expense(ledger, &expense_type, parse_amount_arg(&amount)?)?;
        }

        Commands::Sort { key, format } => {
            if let Some(entries) = manager.sort_expenses(ledger, &key)? {
                let stdout = std::io::stdout();
                let handle = stdout.lock();
                match format {
                    ReportFormat::Table => write_report_table(&entries, handle)?,
                    ReportFormat::Csv => write_report_csv(&entries, handle)?,
                    ReportFormat::Json => write_report_json(&entries, handle)?,
                };
            }
        }

        Commands::Export {
            output,
            expense_types,
        } => {
            let count = manager
                .export_expenses(ledger, &expense_types, &output)
                .with_context(|| format!("Failed to export to {}", output.display()))?;
            println!("Exported {} expense types to {}", count, output.display());
        }
    }

    Ok(())
}

fn parse_amount_arg(input: &str) -> Result<Amount> {
    parse_amount(input).with_context(|| format!("Invalid amount '{}'", input))
}
