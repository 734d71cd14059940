//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use crate::ledger::Ledger;

/// The state of the server.
///
/// The ledger is the only shared mutable resource in the application. It is
/// only ever locked for the duration of a single synchronous mutation or
/// read, never across an await point.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The in-memory state store.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create a new [AppState] with an empty ledger.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland". It is used to decide what "today" means for the
    /// date field defaults.
    pub fn new(local_timezone: &str) -> Self {
        Self {
            local_timezone: local_timezone.to_owned(),
            ledger: Arc::new(Mutex::new(Ledger::new())),
        }
    }
}
