//! Shared state handed to HTTP handlers.

use std::sync::Arc;

use crate::domain::ports::InventoryService;

/// Application state: the use-case ports the handlers call.
#[derive(Clone)]
pub struct HttpState {
    pub inventory: Arc<dyn InventoryService>,
}

impl HttpState {
    /// Bundle the service behind the handler-facing state.
    pub fn new(inventory: Arc<dyn InventoryService>) -> Self {
        Self { inventory }
    }
}
