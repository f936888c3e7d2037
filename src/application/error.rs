use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Amount;

#[derive(Error, Debug)]
pub enum ExpenseError {
    #[error("Insufficient amount for category {category}: amount {amount:.2}, requested {requested:.2}")]
    Overdraft {
        category: String,
        amount: Amount,
        requested: Amount,
    },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExpenseError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ExpenseError::FileNotFound(path)
        } else {
            ExpenseError::Read { path, source }
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExpenseError::Write {
            path: path.into(),
            source,
        }
    }
}
