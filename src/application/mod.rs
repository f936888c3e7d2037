// Application layer - operations over a caller-owned ledger.
// The manager never keeps a ledger of its own; every call receives it.

pub mod error;
pub mod manager;

pub use error::*;
pub use manager::*;
