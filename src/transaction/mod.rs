//! Transaction recording for the tracker.
//!
//! This module contains everything related to transactions:
//! - The create endpoint and the entry form view
//! - The delete endpoint and the transaction list view
//!
//! The [Transaction](crate::ledger::Transaction) model itself lives in the
//! ledger module, next to the store that owns it.

mod create_endpoint;
mod delete_endpoint;
mod form;
mod table;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;

pub(crate) use form::transaction_form;
pub(crate) use table::transactions_table;
