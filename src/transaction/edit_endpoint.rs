//! Defines the endpoint for editing an existing transaction.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, Transaction, TransactionId, TransactionKind, TransactionStatus,
    store::LedgerStore,
};

/// The payload for editing a transaction.
///
/// The ID comes from the request path; the payload carries the replacement
/// record.
#[derive(Debug, Deserialize)]
pub struct EditTransactionData {
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
    /// The pending/posted status, if this deployment tracks one.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// The owner tag, if this deployment tracks one.
    #[serde(default)]
    pub owner: Option<String>,
}

/// A route handler for replacing a transaction wholesale by its ID.
///
/// Transactions are never partially mutated; an edit swaps the whole
/// record. An unknown ID is a benign no-op, not an insert. Either way the
/// response is the refreshed ledger snapshot.
pub async fn edit_transaction_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(transaction_id): Path<TransactionId>,
    Json(data): Json<EditTransactionData>,
) -> Result<Response, Error>
where
    S: LedgerStore + Send + 'static,
{
    let mut builder = Transaction::build(data.kind, data.amount, data.date, &data.description)
        .id(transaction_id.clone())
        .category(&data.category);

    if let Some(status) = data.status {
        builder = builder.status(status);
    }

    if let Some(owner) = &data.owner {
        builder = builder.owner(owner);
    }

    let transaction = builder.finalise()?;

    let store = state.store()?;
    let mut ledger = store.load()?;

    if ledger.update_transaction(transaction) {
        store.save(&ledger)?;
    } else {
        tracing::debug!("No transaction with ID {transaction_id} to update");
    }

    Ok(Json(ledger.snapshot()).into_response())
}

#[cfg(test)]
mod edit_transaction_endpoint_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::{
        AppState, LedgerSnapshot, MemoryLedgerStore, build_router,
        endpoints::{self, format_endpoint},
    };

    fn get_test_server() -> TestServer {
        let state = AppState::new(MemoryLedgerStore::default(), "UTC");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn add_rent(server: &TestServer) -> LedgerSnapshot {
        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "date": "2024-01-02",
                "description": "Rent",
                "amount": 800.0,
                "category": "Bills & Utilities",
                "type": "debit",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        response.json::<LedgerSnapshot>()
    }

    #[tokio::test]
    async fn replaces_the_transaction_and_recomputes_the_balance() {
        let server = get_test_server();
        let snapshot = add_rent(&server).await;
        let rent_id = snapshot.transactions[0].id.clone();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, rent_id.as_ref()))
            .json(&json!({
                "date": "2024-01-02",
                "description": "Rent (corrected)",
                "amount": 750.0,
                "category": "Bills & Utilities",
                "type": "debit",
            }))
            .await;

        response.assert_status_ok();
        let snapshot = response.json::<LedgerSnapshot>();
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.transactions[0].id, rent_id);
        assert_eq!(snapshot.transactions[0].description, "Rent (corrected)");
        assert_eq!(snapshot.balance, -750.0);
    }

    #[tokio::test]
    async fn editing_an_unknown_id_is_a_no_op_not_an_insert() {
        let server = get_test_server();
        add_rent(&server).await;

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, "no-such-id"))
            .json(&json!({
                "date": "2024-01-03",
                "description": "Phantom",
                "amount": 10.0,
                "category": "Other",
                "type": "credit",
            }))
            .await;

        response.assert_status_ok();
        let snapshot = response.json::<LedgerSnapshot>();
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.balance, -800.0);
    }

    #[tokio::test]
    async fn rejects_a_negative_amount() {
        let server = get_test_server();
        let snapshot = add_rent(&server).await;
        let rent_id = snapshot.transactions[0].id.clone();

        let response = server
            .put(&format_endpoint(endpoints::TRANSACTION, rent_id.as_ref()))
            .json(&json!({
                "date": "2024-01-02",
                "description": "Rent",
                "amount": -800.0,
                "category": "Bills & Utilities",
                "type": "debit",
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
