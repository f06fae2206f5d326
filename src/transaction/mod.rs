//! Transaction management for the money tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing, querying, and managing transactions
//! - The JSON endpoints for the five REST operations over transactions

mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod list_transactions_endpoint;
mod update_transaction_endpoint;

pub use core::{
    Transaction, TransactionBuilder, TransactionChanges, TransactionId, TransactionKind,
    create_transaction, create_transaction_table, delete_transaction, get_transaction,
    list_transactions, map_transaction_row, update_transaction,
};
pub use create_transaction_endpoint::create_transaction_endpoint;
pub use delete_transaction_endpoint::delete_transaction_endpoint;
pub use list_transactions_endpoint::list_transactions_endpoint;
pub use update_transaction_endpoint::update_transaction_endpoint;
