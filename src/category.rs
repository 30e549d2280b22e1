//! Defines the endpoint for adding a category label.
//!
//! Categories act as input assistance for the transaction form: the known
//! labels pre-fill the category picker. They never affect the balance.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppState, CategoryName, Error, store::LedgerStore};

/// The payload for adding a category label.
#[derive(Debug, Deserialize)]
pub struct CategoryData {
    /// The category label to add.
    pub name: String,
}

/// A route handler for adding a category label to the ledger's set.
///
/// Responds with 201 Created and the sorted category list, or 200 OK with
/// the unchanged list when the label was already known.
pub async fn create_category_endpoint<S>(
    State(state): State<AppState<S>>,
    Json(data): Json<CategoryData>,
) -> Result<Response, Error>
where
    S: LedgerStore + Send + 'static,
{
    let name = CategoryName::new(&data.name)?;

    let store = state.store()?;
    let mut ledger = store.load()?;

    let status_code = if ledger.add_category(name) {
        store.save(&ledger)?;
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status_code, Json(ledger.categories().to_vec())).into_response())
}
