//! Core ledger domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::Error;

/// The unique identifier of a transaction.
///
/// IDs are opaque strings. Clients that create transactions offline may
/// assign their own IDs; otherwise the server generates one with
/// [TransactionId::generate]. An ID is stable for the lifetime of its
/// transaction and unique within one ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a transaction ID from a client-assigned string.
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Generate a new random transaction ID.
    ///
    /// A random UUID gives an extremely low collision probability, which is
    /// all the ledger needs: IDs must be unique within one ledger, not
    /// globally.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a transaction takes money out of the ledger or puts money in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// The transaction decreases the balance.
    Debit,
    /// The transaction increases the balance.
    Credit,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Debit => write!(f, "debit"),
            TransactionKind::Credit => write!(f, "credit"),
        }
    }
}

/// Whether a transaction has cleared.
///
/// Some deployments enter transactions before they clear and track them as
/// pending. A transaction that carries no status is treated as posted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Entered but not yet cleared. Pending transactions do not count
    /// toward the balance.
    Pending,
    /// Cleared. Posted transactions count toward the balance.
    Posted,
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// A transaction is immutable once created; edits replace the whole record
/// rather than mutating fields in place.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    ///
    /// This is a non-negative magnitude. Whether it is added to or
    /// subtracted from the balance is carried by `kind`.
    pub amount: f64,
    /// The category label, e.g. "Income", "Bills & Utilities".
    ///
    /// Categories are free text and form an open set.
    pub category: String,
    /// Whether the transaction is a debit or a credit.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Whether the transaction has cleared. Absent means posted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionStatus>,
    /// Which member of a shared ledger entered the transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        kind: TransactionKind,
        amount: f64,
        date: Date,
        description: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            kind,
            amount,
            date,
            description: description.to_owned(),
            id: None,
            category: None,
            status: None,
            owner: None,
        }
    }
}

/// The category given to transactions created without one.
const FALLBACK_CATEGORY: &str = "Other";

/// A builder for creating [Transaction] instances.
///
/// Optional fields get sensible defaults: the ID is generated if the client
/// did not assign one, the category falls back to "Other", and status and
/// owner are left unset. Call [TransactionBuilder::finalise] to validate
/// the amount and produce the [Transaction].
///
/// # Examples
///
/// ```
/// use time::macros::date;
///
/// use chequebook::{Transaction, TransactionKind};
///
/// let transaction = Transaction::build(
///         TransactionKind::Credit,
///         1000.0,
///         date!(2024 - 01 - 01),
///         "Paycheck",
///     )
///     .category("Income")
///     .finalise()
///     .unwrap();
///
/// assert_eq!(transaction.amount, 1000.0);
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    kind: TransactionKind,
    amount: f64,
    date: Date,
    description: String,
    id: Option<TransactionId>,
    category: Option<String>,
    status: Option<TransactionStatus>,
    owner: Option<String>,
}

impl TransactionBuilder {
    /// Set a client-assigned ID for the transaction.
    pub fn id(mut self, id: TransactionId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the category label for the transaction.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_owned());
        self
    }

    /// Set the pending/posted status for the transaction.
    pub fn status(mut self, status: TransactionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the owner tag for the transaction.
    pub fn owner(mut self, owner: &str) -> Self {
        self.owner = Some(owner.to_owned());
        self
    }

    /// Validate the builder and produce the [Transaction].
    ///
    /// Generates an ID if the client did not assign one.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NonFiniteAmount] if the amount is NaN or infinite,
    /// - or [Error::NegativeAmount] if the amount is below zero.
    pub fn finalise(self) -> Result<Transaction, Error> {
        if !self.amount.is_finite() {
            return Err(Error::NonFiniteAmount(self.amount));
        }

        if self.amount < 0.0 {
            return Err(Error::NegativeAmount(self.amount));
        }

        Ok(Transaction {
            id: self.id.unwrap_or_else(TransactionId::generate),
            date: self.date,
            description: self.description,
            amount: self.amount,
            category: self.category.unwrap_or_else(|| FALLBACK_CATEGORY.to_owned()),
            kind: self.kind,
            status: self.status,
            owner: self.owner,
        })
    }
}

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// an empty string after trimming whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_string()))
        }
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}




#[cfg(test)]
mod category_name_tests {
    use crate::Error;

    use super::CategoryName;

    #[test]
    fn trims_whitespace() {
        let name = CategoryName::new("  Groceries ").unwrap();

        assert_eq!(name.as_ref(), "Groceries");
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(CategoryName::new("   "), Err(Error::EmptyCategoryName));
    }
}
