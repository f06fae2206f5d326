//! Defines the endpoint for the aggregate totals.
use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    summary::{Summary, core::get_summary},
};

/// The state needed to compute the summary.
#[derive(Debug, Clone)]
pub struct SummaryState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for SummaryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// A route handler that returns the income, expense, and balance totals.
pub async fn get_summary_endpoint(
    State(state): State<SummaryState>,
) -> Result<Json<Summary>, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let summary = get_summary(&connection)?;

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, endpoints, summary::Summary};

    fn get_test_server() -> TestServer {
        let conn = Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(conn).expect("Could not initialize database.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    #[tokio::test]
    async fn summary_of_empty_database_is_all_zeroes() {
        let server = get_test_server();

        let response = server.get(endpoints::SUMMARY_API).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Summary>(),
            Summary {
                income: 0.0,
                expense: 0.0,
                balance: 0.0
            }
        );
    }

    #[tokio::test]
    async fn summary_reflects_created_transactions() {
        let server = get_test_server();
        server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "title": "Salary",
                "amount": 100.0,
                "type": "income",
            }))
            .await
            .assert_status_success();
        server
            .post(endpoints::TRANSACTIONS_API)
            .json(&json!({
                "title": "Groceries",
                "amount": 40.0,
                "type": "expense",
            }))
            .await
            .assert_status_success();

        let response = server.get(endpoints::SUMMARY_API).await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<Summary>(),
            Summary {
                income: 100.0,
                expense: 40.0,
                balance: 60.0
            }
        );
    }
}
