//! Defines the endpoint for creating a new transaction.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, Transaction, TransactionId, TransactionKind, TransactionStatus,
    store::LedgerStore,
};

/// The payload for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct NewTransactionData {
    /// The date when the transaction occurred.
    pub date: Date,
    /// Text detailing the transaction.
    pub description: String,
    /// The magnitude of the transaction in dollars.
    pub amount: f64,
    /// The category label for the transaction.
    pub category: String,
    /// Whether the transaction is a debit or a credit.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// A client-assigned ID. The server generates one when absent.
    #[serde(default)]
    pub id: Option<TransactionId>,
    /// The pending/posted status, if this deployment tracks one.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// The owner tag, if this deployment tracks one.
    #[serde(default)]
    pub owner: Option<String>,
}

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created and the refreshed ledger snapshot.
pub async fn create_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Json(data): Json<NewTransactionData>,
) -> Result<Response, Error>
where
    S: LedgerStore + Send + 'static,
{
    let mut builder = Transaction::build(data.kind, data.amount, data.date, &data.description)
        .category(&data.category);

    if let Some(id) = data.id {
        builder = builder.id(id);
    }

    if let Some(status) = data.status {
        builder = builder.status(status);
    }

    if let Some(owner) = &data.owner {
        builder = builder.owner(owner);
    }

    let transaction = builder.finalise()?;

    let store = state.store()?;
    let mut ledger = store.load()?;
    ledger.add_transaction(transaction)?;
    store.save(&ledger)?;

    Ok((StatusCode::CREATED, Json(ledger.snapshot())).into_response())
}
