//! The ledger aggregate and its mutation operations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    ledger::{
        balance::calculate_balance,
        models::{CategoryName, Transaction, TransactionId},
    },
};

/// The category labels every new ledger starts with.
///
/// Kept in sorted order so the category picker reads the same way between
/// runs. The set only ever grows, and labels without transactions are fine:
/// the categories are input assistance, they never affect the balance.
const DEFAULT_CATEGORIES: [&str; 11] = [
    "Bills & Utilities",
    "Education",
    "Entertainment",
    "Food & Dining",
    "Healthcare",
    "Income",
    "Other",
    "Shopping",
    "Transfer",
    "Transportation",
    "Travel",
];

/// The full ledger state: transactions in insertion order plus the known
/// category labels.
///
/// The balance is derived from the transactions on demand rather than
/// stored, so it can never drift from the transaction list.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<String>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: DEFAULT_CATEGORIES.map(String::from).to_vec(),
        }
    }
}

impl Ledger {
    /// Rebuild a ledger from loaded state, repairing its invariants.
    ///
    /// Storage media are not trusted to validate anything, so this function
    /// restores the two invariants the rest of the crate relies on:
    /// - transaction IDs are unique (later duplicates are dropped with a
    ///   warning),
    /// - the category set is a sorted superset of the categories appearing
    ///   on the transactions.
    ///
    /// An empty category list is replaced with the default labels, matching
    /// the behaviour of a brand-new ledger.
    pub fn from_parts(transactions: Vec<Transaction>, categories: Vec<String>) -> Self {
        let mut seen_ids = HashSet::new();
        let transactions: Vec<Transaction> = transactions
            .into_iter()
            .filter(|transaction| {
                let is_new = seen_ids.insert(transaction.id.clone());

                if !is_new {
                    tracing::warn!(
                        "Dropping transaction with duplicate ID {} from loaded ledger",
                        transaction.id
                    );
                }

                is_new
            })
            .collect();

        let mut categories = if categories.is_empty() {
            DEFAULT_CATEGORIES.map(String::from).to_vec()
        } else {
            categories
        };
        categories.extend(
            transactions
                .iter()
                .map(|transaction| transaction.category.clone()),
        );
        categories.sort();
        categories.dedup();

        Self {
            transactions,
            categories,
        }
    }

    /// Every transaction in the ledger, in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The known category labels, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The signed sum of all posted transaction effects.
    pub fn balance(&self) -> f64 {
        calculate_balance(&self.transactions)
    }

    /// Append a transaction to the ledger and record its category label.
    ///
    /// # Errors
    /// This function will return an [Error::DuplicateTransactionId] if a
    /// transaction with the same ID is already in the ledger.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), Error> {
        if self.contains(&transaction.id) {
            return Err(Error::DuplicateTransactionId(transaction.id));
        }

        self.record_category(&transaction.category);
        self.transactions.push(transaction);

        Ok(())
    }

    /// Remove the transaction with the given ID.
    ///
    /// Returns whether a transaction was removed. An unknown ID is a benign
    /// no-op, not an error.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> bool {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != *id);

        self.transactions.len() < count_before
    }

    /// Replace the transaction whose ID matches `transaction` wholesale.
    ///
    /// Returns whether a transaction was replaced. An unknown ID is a benign
    /// no-op, not an error; in particular this does NOT insert the
    /// transaction as a new entry.
    pub fn update_transaction(&mut self, transaction: Transaction) -> bool {
        let Some(existing) = self
            .transactions
            .iter_mut()
            .find(|existing| existing.id == transaction.id)
        else {
            return false;
        };

        *existing = transaction;
        let category = existing.category.clone();
        self.record_category(&category);

        true
    }

    /// Add a category label to the set if it is not already present.
    ///
    /// Returns whether the label was added. The set is kept sorted for
    /// display stability.
    pub fn add_category(&mut self, name: CategoryName) -> bool {
        self.record_category(name.as_ref())
    }

    /// Take a [LedgerSnapshot] with a freshly computed balance.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            transactions: self.transactions.clone(),
            balance: self.balance(),
            categories: self.categories.clone(),
        }
    }

    fn contains(&self, id: &TransactionId) -> bool {
        self.transactions
            .iter()
            .any(|transaction| transaction.id == *id)
    }

    fn record_category(&mut self, label: &str) -> bool {
        match self.categories.binary_search_by(|known| known.as_str().cmp(label)) {
            Ok(_) => false,
            Err(position) => {
                self.categories.insert(position, label.to_owned());
                true
            }
        }
    }
}

/// The wholesale load/save shape shared with clients and storage media.
///
/// Loading returns this shape and saving accepts it. The stored balance is
/// a display convenience only and is recomputed whenever the shape is
/// turned back into a [Ledger].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Every transaction in the ledger, in insertion order.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// The balance at the time the snapshot was taken.
    #[serde(default)]
    pub balance: f64,
    /// The known category labels.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl From<LedgerSnapshot> for Ledger {
    fn from(snapshot: LedgerSnapshot) -> Self {
        Ledger::from_parts(snapshot.transactions, snapshot.categories)
    }
}
