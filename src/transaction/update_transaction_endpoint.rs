//! Defines the endpoint for updating an existing transaction.
//!
//! The client UI does not call this route; it exists for API completeness
//! and external tooling.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use axum_extra::extract::WithRejection;
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    transaction::{
        Transaction, TransactionChanges, TransactionId, TransactionKind,
        core::update_transaction,
    },
};

/// The state needed to update a transaction.
#[derive(Debug, Clone)]
pub struct UpdateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for UpdateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The request body for updating a transaction.
///
/// Every field is optional; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTransactionForm {
    /// A replacement title.
    #[serde(default)]
    pub title: Option<String>,
    /// A replacement amount.
    #[serde(default)]
    pub amount: Option<f64>,
    /// A replacement kind.
    #[serde(rename = "type", default)]
    pub kind: Option<TransactionKind>,
    /// A replacement date.
    #[serde(default)]
    pub date: Option<Date>,
}

/// A route handler for updating a transaction, returns the updated record.
pub async fn update_transaction_endpoint(
    State(state): State<UpdateTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    WithRejection(Json(form), _): WithRejection<Json<UpdateTransactionForm>, Error>,
) -> Result<Json<Transaction>, Error> {
    let changes = TransactionChanges {
        title: form.title,
        amount: form.amount,
        kind: form.kind,
        date: form.date,
    };

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = update_transaction(transaction_id, changes, &connection)?;

    Ok(Json(transaction))
}
