//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::{
    AppState,
    category::create_category_endpoint,
    endpoints,
    export::export_csv_endpoint,
    snapshot::{get_ledger_endpoint, put_ledger_endpoint},
    store::LedgerStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: LedgerStore + Send + 'static,
{
    Router::new()
        .route(endpoints::ROOT, get(get_service_info))
        .route(endpoints::COFFEE, get(get_coffee))
        .route(
            endpoints::LEDGER_API,
            get(get_ledger_endpoint::<S>).put(put_ledger_endpoint::<S>),
        )
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint::<S>),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint::<S>).delete(delete_transaction_endpoint::<S>),
        )
        .route(
            endpoints::CATEGORIES_API,
            post(create_category_endpoint::<S>),
        )
        .route(endpoints::EXPORT_API, get(export_csv_endpoint::<S>))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' reports the service name and version.
async fn get_service_info() -> Response {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (
        StatusCode::IM_A_TEAPOT,
        Json(json!({ "error": "I'm a teapot" })),
    )
        .into_response()
}

async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

#[cfg(test)]
mod routing_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{AppState, MemoryLedgerStore, build_router, endpoints};

    fn get_test_server() -> TestServer {
        let state = AppState::new(MemoryLedgerStore::default(), "UTC");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn root_reports_name_and_version() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn coffee_is_a_teapot() {
        let server = get_test_server();

        let response = server.get(endpoints::COFFEE).await;

        response.assert_status(StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn unknown_route_is_a_json_404() {
        let server = get_test_server();

        let response = server.get("/no/such/route").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"], "not found");
    }
}
