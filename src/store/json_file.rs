//! Flat-file JSON persistence for the ledger.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Error, Ledger, LedgerSnapshot, store::LedgerStore};

/// A ledger store backed by a single JSON file on disk.
///
/// The file holds one [LedgerSnapshot]. A missing or unparsable file loads
/// as the default ledger. Saves serialize the whole snapshot to a sibling
/// temp file and rename it over the target, so the file on disk is always
/// either the old ledger or the new one, never a half-written mix.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store that reads and writes the JSON file at `path`.
    ///
    /// The file and its parent directory do not need to exist yet; they are
    /// created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Ledger, Error> {
        if !self.path.exists() {
            return Ok(Ledger::default());
        }

        let contents =
            fs::read_to_string(&self.path).map_err(|error| Error::StoreRead(error.to_string()))?;

        match serde_json::from_str::<LedgerSnapshot>(&contents) {
            Ok(snapshot) => Ok(Ledger::from(snapshot)),
            Err(error) => {
                tracing::warn!(
                    "Could not parse the ledger file {}, starting from the default ledger: {error}",
                    self.path.display()
                );
                Ok(Ledger::default())
            }
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&ledger.snapshot())
            .map_err(|error| Error::JsonSerialization(error.to_string()))?;

        write_atomic(&self.path, &json).map_err(|error| Error::StoreWrite(error.to_string()))
    }
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&tmp_path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod json_file_store_tests {
    use std::fs;

    use tempfile::tempdir;
    use time::macros::date;

    use crate::{
        Ledger, Transaction, TransactionKind,
        store::{LedgerStore, json_file::JsonFileStore},
    };

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::default();
        ledger
            .add_transaction(
                Transaction::build(
                    TransactionKind::Credit,
                    1000.0,
                    date!(2024 - 01 - 01),
                    "Paycheck",
                )
                .category("Income")
                .finalise()
                .unwrap(),
            )
            .unwrap();

        ledger
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));
        let ledger = sample_ledger();

        store.save(&ledger).expect("Could not save ledger");
        let loaded = store.load().expect("Could not load ledger");

        assert_eq!(loaded, ledger);
    }

    #[test]
    fn missing_file_loads_as_the_default_ledger() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("does_not_exist.json"));

        let loaded = store.load().expect("Could not load ledger");

        assert_eq!(loaded, Ledger::default());
    }

    #[test]
    fn malformed_file_loads_as_the_default_ledger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ this is not JSON").unwrap();
        let store = JsonFileStore::new(&path);

        let loaded = store.load().expect("Could not load ledger");

        assert_eq!(loaded, Ledger::default());
    }

    #[test]
    fn partial_file_parses_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{ "transactions": [] }"#).unwrap();
        let store = JsonFileStore::new(&path);

        let loaded = store.load().expect("Could not load ledger");

        assert!(loaded.transactions().is_empty());
        assert!(loaded.categories().contains(&"Other".to_owned()));
    }

    #[test]
    fn save_creates_the_parent_directory() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data").join("ledger.json"));

        store.save(&sample_ledger()).expect("Could not save ledger");

        assert!(dir.path().join("data").join("ledger.json").exists());
    }

    #[test]
    fn saved_file_stores_the_snapshot_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let store = JsonFileStore::new(&path);

        store.save(&sample_ledger()).expect("Could not save ledger");

        let contents = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["balance"], 1000.0);
        assert_eq!(json["transactions"][0]["type"], "credit");
        assert!(json["categories"].is_array());
    }
}
