//! Defines the core data model and database queries for transactions.

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::Error;

/// Alias for the integer type used for transaction row ids.
pub type TransactionId = i64;

/// Whether a transaction brought money in or sent money out.
///
/// Stored as lowercase text in the database and serialized the same way in
/// JSON, where the field is named `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, e.g. a salary payment.
    Income,
    /// Money spent, e.g. a grocery run.
    Expense,
}

impl TransactionKind {
    fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl ToSql for TransactionKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TransactionKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(FromSqlError::Other(
                format!("unknown transaction kind {other:?}").into(),
            )),
        }
    }
}

/// An income or expense record, i.e. an event where money was either earned
/// or spent.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A short text describing what the transaction was for.
    pub title: String,
    /// The amount of money earned or spent in this transaction.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// When the transaction happened.
    pub date: Date,
    /// When the record was first stored.
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When the record was last changed.
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(title: &str, amount: f64, kind: TransactionKind) -> TransactionBuilder {
        TransactionBuilder {
            title: title.to_owned(),
            amount,
            kind,
            date: None,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// The date is the only optional field; when it is not set,
/// [create_transaction] falls back to the current UTC date.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// A short text describing what the transaction was for.
    ///
    /// Surrounding whitespace is stripped before storage; a title that is
    /// empty after trimming is rejected.
    pub title: String,

    /// The monetary amount of the transaction.
    pub amount: f64,

    /// Whether the transaction is income or an expense.
    pub kind: TransactionKind,

    /// The date when the transaction occurred, or `None` to use today.
    pub date: Option<Date>,
}

impl TransactionBuilder {
    /// Set the date for the transaction.
    pub fn date(mut self, date: Option<Date>) -> Self {
        self.date = date;
        self
    }
}

/// The fields of a transaction that may be changed by an update.
///
/// Fields left as `None` keep their stored values.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct TransactionChanges {
    /// A replacement title, trimmed and checked for emptiness like on create.
    pub title: Option<String>,
    /// A replacement amount.
    pub amount: Option<f64>,
    /// A replacement kind.
    pub kind: Option<TransactionKind>,
    /// A replacement date.
    pub date: Option<Date>,
}

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyTitle] if the title is empty after trimming whitespace,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let title = builder.title.trim();

    if title.is_empty() {
        return Err(Error::EmptyTitle);
    }

    let date = builder
        .date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let now = OffsetDateTime::now_utc();

    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (title, amount, kind, date, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING id, title, amount, kind, date, created_at, updated_at",
        )?
        .query_row(
            (title, builder.amount, builder.kind, date, now, now),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve all transactions sorted by date descending.
///
/// Transactions that share a date are returned newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn list_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, amount, kind, date, created_at, updated_at
             FROM \"transaction\"
             ORDER BY date DESC, id DESC",
        )?
        .query_map([], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, title, amount, kind, date, created_at, updated_at
             FROM \"transaction\" WHERE id = :id",
        )?
        .query_one(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Apply `changes` to the transaction with `id` and return the updated record.
///
/// Fields left as `None` keep their stored values. The record's `updated_at`
/// timestamp is refreshed.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyTitle] if a replacement title is empty after trimming,
/// - [Error::UpdateMissingTransaction] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn update_transaction(
    id: TransactionId,
    changes: TransactionChanges,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let title = match &changes.title {
        Some(title) => {
            let trimmed = title.trim();

            if trimmed.is_empty() {
                return Err(Error::EmptyTitle);
            }

            Some(trimmed.to_owned())
        }
        None => None,
    };

    connection
        .prepare(
            "UPDATE \"transaction\"
             SET title = COALESCE(?1, title),
                 amount = COALESCE(?2, amount),
                 kind = COALESCE(?3, kind),
                 date = COALESCE(?4, date),
                 updated_at = ?5
             WHERE id = ?6
             RETURNING id, title, amount, kind, date, created_at, updated_at",
        )?
        .query_row(
            (
                title,
                changes.amount,
                changes.kind,
                changes.date,
                OffsetDateTime::now_utc(),
                id,
            ),
            map_transaction_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::UpdateMissingTransaction,
            error => error.into(),
        })
}

/// The number of rows removed by a delete.
pub type RowsAffected = usize;

/// Delete the transaction with `id`, returning how many rows were removed.
///
/// Deleting an id that matches no row is not an error here; callers decide
/// what a zero count means.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn delete_transaction(
    id: TransactionId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "DELETE FROM \"transaction\" WHERE id = :id",
            &[(":id", &id)],
        )
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                kind TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
                date TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
                )",
        (),
    )?;

    // Covers the ORDER BY in the list query.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let kind = row.get(3)?;
    let date = row.get(4)?;
    let created_at = row.get(5)?;
    let updated_at = row.get(6)?;

    Ok(Transaction {
        id,
        title,
        amount,
        kind,
        date,
        created_at,
        updated_at,
    })
}
