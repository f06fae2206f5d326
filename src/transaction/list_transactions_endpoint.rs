//! Defines the endpoint for listing all transactions.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    transaction::{Transaction, core::list_transactions},
};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that returns every transaction sorted by date descending.
///
/// There is no pagination; store errors surface as a 500 with a JSON message.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = list_transactions(&connection)?;

    Ok(Json(transactions))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, endpoints, transaction::Transaction};

    fn get_test_server() -> TestServer {
        let conn = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(conn).expect("Could not initialize database.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn list_is_empty_for_fresh_database() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        assert_eq!(response.json::<Vec<Transaction>>(), []);
    }

    #[tokio::test]
    async fn list_returns_transactions_sorted_by_date_descending() {
        let server = get_test_server();
        for (title, date) in [
            ("Oldest", "2025-01-01"),
            ("Newest", "2025-03-01"),
            ("Middle", "2025-02-01"),
        ] {
            server
                .post(endpoints::TRANSACTIONS_API)
                .json(&json!({
                    "title": title,
                    "amount": 1.0,
                    "type": "expense",
                    "date": date,
                }))
                .await
                .assert_status_success();
        }

        let response = server.get(endpoints::TRANSACTIONS_API).await;

        response.assert_status_ok();
        let titles: Vec<String> = response
            .json::<Vec<Transaction>>()
            .into_iter()
            .map(|transaction| transaction.title)
            .collect();
        assert_eq!(titles, ["Newest", "Middle", "Oldest"]);
    }
}
