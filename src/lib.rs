pub mod application;
pub mod cli;
pub mod domain;
pub mod io;

pub use application::{ExpenseError, ExpenseManager};
pub use domain::*;
pub use io::ExpenseLoader;
