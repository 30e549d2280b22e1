//! The ledger core: domain types, the balance rule and the mutation
//! operations that the HTTP endpoints call into.

mod balance;
mod core;
mod models;

pub use balance::calculate_balance;
pub use core::{Ledger, LedgerSnapshot};
pub use models::{
    CategoryName, Transaction, TransactionBuilder, TransactionId, TransactionKind,
    TransactionStatus,
};
