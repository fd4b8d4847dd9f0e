use std::sync::Arc;

use crate::core::Config;
use crate::store::EmployeeStore;

/// Server state - shared references to every service
///
/// Cloning is cheap: the store is behind an `Arc`, so each handler sees the
/// same records.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Employee record store
    pub store: Arc<EmployeeStore>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: Arc::new(EmployeeStore::new()),
        }
    }
}
