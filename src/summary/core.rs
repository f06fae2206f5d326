//! Computes the aggregate totals over all transactions.

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{Error, transaction::TransactionKind};

/// The derived totals over all transactions. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expense: f64,
    /// Income minus expense.
    pub balance: f64,
}

/// Sum the transaction amounts grouped by kind and compute the balance.
///
/// Both totals start at zero so that a kind with no transactions still
/// reports a number.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_summary(connection: &Connection) -> Result<Summary, Error> {
    let mut income = 0.0;
    let mut expense = 0.0;

    let mut statement =
        connection.prepare("SELECT kind, SUM(amount) FROM \"transaction\" GROUP BY kind")?;
    let totals = statement.query_map([], |row| {
        Ok((
            row.get::<_, TransactionKind>(0)?,
            row.get::<_, f64>(1)?,
        ))
    })?;

    for total in totals {
        let (kind, amount) = total?;

        match kind {
            TransactionKind::Income => income = amount,
            TransactionKind::Expense => expense = amount,
        }
    }

    Ok(Summary {
        income,
        expense,
        balance: income - expense,
    })
}

#[cfg(test)]
mod summary_tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        summary::{Summary, get_summary},
        transaction::{Transaction, TransactionKind, create_transaction},
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn summary_of_empty_database_is_all_zeroes() {
        let conn = get_test_connection();

        let summary = get_summary(&conn).unwrap();

        assert_eq!(
            summary,
            Summary {
                income: 0.0,
                expense: 0.0,
                balance: 0.0
            }
        );
    }

    #[test]
    fn summary_sums_amounts_by_kind() {
        let conn = get_test_connection();
        create_transaction(
            Transaction::build("Salary", 100.0, TransactionKind::Income),
            &conn,
        )
        .unwrap();
        create_transaction(
            Transaction::build("Groceries", 40.0, TransactionKind::Expense),
            &conn,
        )
        .unwrap();

        let summary = get_summary(&conn).unwrap();

        assert_eq!(
            summary,
            Summary {
                income: 100.0,
                expense: 40.0,
                balance: 60.0
            }
        );
    }

    #[test]
    fn summary_with_only_expenses_keeps_income_at_zero() {
        let conn = get_test_connection();
        create_transaction(
            Transaction::build("Rent", 1200.0, TransactionKind::Expense),
            &conn,
        )
        .unwrap();
        create_transaction(
            Transaction::build("Groceries", 40.0, TransactionKind::Expense),
            &conn,
        )
        .unwrap();

        let summary = get_summary(&conn).unwrap();

        assert_eq!(
            summary,
            Summary {
                income: 0.0,
                expense: 1240.0,
                balance: -1240.0
            }
        );
    }
}
