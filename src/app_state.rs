//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, store::LedgerStore};

/// The state of the REST server.
///
/// Generic over the [LedgerStore] so the same router serves the JSON file
/// store in production and the in-memory store in tests.
#[derive(Debug)]
pub struct AppState<S> {
    /// The store the ledger is loaded from and saved to.
    store: Arc<Mutex<S>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<S: LedgerStore> AppState<S> {
    /// Create a new [AppState] over `store`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland". It is used to date the CSV export filename.
    pub fn new(store: S, local_timezone: &str) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            local_timezone: local_timezone.to_owned(),
        }
    }

    /// Acquire the store for a read-modify-write cycle.
    ///
    /// Every mutation loads the full ledger, changes it in memory and saves
    /// it back while holding this lock, so requests within the process
    /// cannot interleave their writes. Writers in other processes are not
    /// arbitrated; the last writer wins.
    ///
    /// # Errors
    /// Returns an [Error::StoreLock] if the lock is poisoned.
    pub fn store(&self) -> Result<MutexGuard<'_, S>, Error> {
        self.store.lock().map_err(|error| {
            tracing::error!("could not acquire the ledger store lock: {error}");
            Error::StoreLock
        })
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            local_timezone: self.local_timezone.clone(),
        }
    }
}
