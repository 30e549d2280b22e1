//! An in-memory ledger store.

use std::sync::Mutex;

use crate::{Error, Ledger, store::LedgerStore};

/// A ledger store that keeps the ledger in memory.
///
/// The in-memory analog of the JSON file store: endpoint tests use it the
/// way an in-memory database would be used against a SQL store. State is
/// lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryLedgerStore {
    ledger: Mutex<Ledger>,
}

impl MemoryLedgerStore {
    /// Create a store holding `ledger` as its persisted state.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load(&self) -> Result<Ledger, Error> {
        self.ledger
            .lock()
            .map(|ledger| ledger.clone())
            .map_err(|_| Error::StoreLock)
    }

    fn save(&self, ledger: &Ledger) -> Result<(), Error> {
        let mut stored = self.ledger.lock().map_err(|_| Error::StoreLock)?;
        *stored = ledger.clone();

        Ok(())
    }
}

#[cfg(test)]
mod memory_store_tests {
    use time::macros::date;

    use crate::{
        Ledger, Transaction, TransactionKind,
        store::{LedgerStore, memory::MemoryLedgerStore},
    };

    #[test]
    fn starts_with_the_default_ledger() {
        let store = MemoryLedgerStore::default();

        let loaded = store.load().unwrap();

        assert_eq!(loaded, Ledger::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryLedgerStore::default();
        let mut ledger = store.load().unwrap();
        ledger
            .add_transaction(
                Transaction::build(TransactionKind::Debit, 4.5, date!(2024 - 05 - 06), "Coffee")
                    .category("Food & Dining")
                    .finalise()
                    .unwrap(),
            )
            .unwrap();

        store.save(&ledger).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, ledger);
    }
}
