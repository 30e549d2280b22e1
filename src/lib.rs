//! Chequebook is a web app for keeping a personal checkbook ledger.
//!
//! Users record debit and credit transactions with a date, description,
//! category and amount. The app keeps a running balance and exports the
//! transaction history to CSV.
//!
//! This library provides a JSON REST API over the ledger. The full ledger
//! state is loaded from and saved to a pluggable [LedgerStore] wholesale,
//! the reference store being a flat JSON file on disk.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod category;
mod endpoints;
mod export;
mod ledger;
mod logging;
mod routing;
mod snapshot;
mod store;
mod timezone;
mod transaction;

pub use app_state::AppState;
pub use export::write_csv;
pub use ledger::{
    CategoryName, Ledger, LedgerSnapshot, Transaction, TransactionBuilder, TransactionId,
    TransactionKind, TransactionStatus, calculate_balance,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use store::{JsonFileStore, LedgerStore, MemoryLedgerStore};
pub use timezone::local_date_today;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A negative amount was used to create or update a transaction.
    ///
    /// Amounts store the magnitude of a transaction. Whether the amount is
    /// added to or subtracted from the balance is carried by the transaction
    /// kind, so negative magnitudes are not allowed.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(f64),

    /// A NaN or infinite amount was used to create or update a transaction.
    #[error("{0} is not a finite amount")]
    NonFiniteAmount(f64),

    /// The ID used to create a transaction already exists in the ledger.
    ///
    /// Clients may assign their own transaction IDs. Rejecting duplicates
    /// keeps every transaction individually addressable for edits and
    /// deletes.
    #[error("a transaction with the ID {0} already exists in the ledger")]
    DuplicateTransactionId(TransactionId),

    /// An empty string was used to create a category name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// The ledger could not be read from the persistence medium.
    ///
    /// Note that a missing or unparsable ledger file is not an error; stores
    /// fall back to the default ledger in those cases so the application
    /// remains usable.
    #[error("could not read the ledger from storage: {0}")]
    StoreRead(String),

    /// The ledger could not be written to the persistence medium.
    ///
    /// The write is not retried. The client decides whether to fall back to
    /// an alternate medium or display a failure notice.
    #[error("could not write the ledger to storage: {0}")]
    StoreWrite(String),

    /// Could not acquire the ledger store lock.
    #[error("could not acquire the ledger store lock")]
    StoreLock,

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonSerialization(String),

    /// An error occurred while writing the transaction history as CSV.
    #[error("could not write the transaction history as CSV: {0}")]
    Csv(String),

    /// An error occurred while getting the local date from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::NegativeAmount(_) | Error::NonFiniteAmount(_) | Error::EmptyCategoryName => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::DuplicateTransactionId(_) => StatusCode::CONFLICT,
            Error::InvalidTimezone(timezone) => {
                tracing::error!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to a valid, canonical timezone string"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
