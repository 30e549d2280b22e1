//! CSV export of the transaction history.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, Transaction, store::LedgerStore, timezone::local_date_today};

/// The CSV header row. The field order is fixed; parsers may rely on it.
const CSV_HEADER: [&str; 5] = ["Date", "Description", "Category", "Amount", "Type"];

/// Render the transaction sequence as CSV text.
///
/// One row per transaction in ledger order under a fixed
/// `Date,Description,Category,Amount,Type` header. Dates are rendered ISO
/// (`2024-01-01`), amounts carry exactly two fractional digits and the type
/// column is `debit` or `credit`. Fields containing the separator or quote
/// character are quoted, so the output round-trips through any standard
/// CSV reader.
///
/// Delivering the text to the user is the caller's concern; this function
/// only produces it.
///
/// # Errors
/// Returns an [Error::Csv] if the underlying writer fails.
pub fn write_csv(transactions: &[Transaction]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|error| Error::Csv(error.to_string()))?;

    for transaction in transactions {
        writer
            .write_record([
                transaction.date.to_string(),
                transaction.description.clone(),
                transaction.category.clone(),
                format!("{:.2}", transaction.amount),
                transaction.kind.to_string(),
            ])
            .map_err(|error| Error::Csv(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::Csv(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::Csv(error.to_string()))
}

/// A route handler for downloading the transaction history as a CSV file.
///
/// The attachment filename carries the server's local date, e.g.
/// `chequebook-2024-01-01.csv`.
pub async fn export_csv_endpoint<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
    S: LedgerStore + Send + 'static,
{
    let store = state.store()?;
    let ledger = store.load()?;

    let csv_text = write_csv(ledger.transactions())?;
    let today = local_date_today(&state.local_timezone)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"chequebook-{today}.csv\""),
            ),
        ],
        csv_text,
    )
        .into_response())
}
