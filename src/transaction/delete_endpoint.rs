//! Defines the endpoint for deleting a transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, TransactionId, store::LedgerStore};

/// A route handler for deleting a transaction by its ID.
///
/// Deleting removes the transaction entirely; there is no soft-delete. An
/// unknown ID is a benign no-op. Either way the response is the refreshed
/// ledger snapshot.
pub async fn delete_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error>
where
    S: LedgerStore + Send + 'static,
{
    let store = state.store()?;
    let mut ledger = store.load()?;

    if ledger.delete_transaction(&transaction_id) {
        store.save(&ledger)?;
    } else {
        tracing::debug!("No transaction with ID {transaction_id} to delete");
    }

    Ok(Json(ledger.snapshot()).into_response())
}
