//! Persistence for the ledger.
//!
//! The core's contract toward a storage medium is exactly load-all and
//! save-all of the ledger state. No transactional guarantees, partial
//! writes or schema validation are assumed from the medium; anything that
//! can hold one JSON document can back the ledger.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryLedgerStore;

use crate::{Error, Ledger};

/// Loads and saves the full ledger state.
pub trait LedgerStore {
    /// Load the whole ledger from the medium.
    ///
    /// Implementers should return the default ledger when the medium is
    /// empty or holds unparsable data, so that the application remains
    /// usable. A medium that exists but cannot be read at all is an error.
    ///
    /// # Errors
    /// Returns an [Error::StoreRead] if the medium cannot be read.
    fn load(&self) -> Result<Ledger, Error>;

    /// Save the whole ledger to the medium, replacing what was there.
    ///
    /// # Errors
    /// Returns an [Error::StoreWrite] if the medium rejects the write. The
    /// write is not retried.
    fn save(&self, ledger: &Ledger) -> Result<(), Error>;
}
