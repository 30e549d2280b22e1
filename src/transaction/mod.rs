//! The transaction endpoints.
//!
//! Each mutation is a full read-modify-write cycle: the handler loads the
//! whole ledger from the store, applies one mutation in memory and saves
//! the whole ledger back, then responds with the refreshed snapshot.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;

pub use create_endpoint::{NewTransactionData, create_transaction_endpoint};
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::{EditTransactionData, edit_transaction_endpoint};
