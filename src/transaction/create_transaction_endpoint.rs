//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
// WithRejection turns a malformed JSON body into the crate error type so the
// client sees a 400 with a JSON message instead of axum's plain-text reply.
use axum_extra::extract::WithRejection;
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    transaction::{Transaction, TransactionKind, core::create_transaction},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The request body for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    pub title: String,
    /// The value of the transaction in dollars.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The date when the transaction occurred. Today when omitted.
    #[serde(default)]
    pub date: Option<Date>,
}

/// A route handler for creating a new transaction, returns the created
/// record with status 201.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    WithRejection(Json(form), _): WithRejection<Json<TransactionForm>, Error>,
) -> Result<(StatusCode, Json<Transaction>), Error> {
    let builder = Transaction::build(&form.title, form.amount, form.kind).date(form.date);

    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transaction = create_transaction(builder, &connection)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
