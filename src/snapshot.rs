//! Defines the endpoints for loading and saving the whole ledger.
//!
//! This is the wholesale boundary the presentation layer syncs through:
//! `GET` returns the full `{transactions, balance, categories}` shape and
//! `PUT` replaces the stored ledger with the posted shape. Clients that
//! cache the ledger locally push their copy here; the last writer wins.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, Ledger, LedgerSnapshot, store::LedgerStore};

/// A route handler for loading the whole ledger.
///
/// The balance in the response is recomputed from the transactions, not
/// read back from storage.
pub async fn get_ledger_endpoint<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
    S: LedgerStore + Send + 'static,
{
    let store = state.store()?;
    let ledger = store.load()?;

    Ok(Json(ledger.snapshot()).into_response())
}

/// A route handler for replacing the stored ledger wholesale.
///
/// The posted balance is ignored and recomputed, and the category set is
/// repaired to cover every category on the posted transactions. The
/// response is the snapshot as stored.
pub async fn put_ledger_endpoint<S>(
    State(state): State<AppState<S>>,
    Json(snapshot): Json<LedgerSnapshot>,
) -> Result<Response, Error>
where
    S: LedgerStore + Send + 'static,
{
    let ledger = Ledger::from(snapshot);

    let store = state.store()?;
    store.save(&ledger)?;

    Ok(Json(ledger.snapshot()).into_response())
}
