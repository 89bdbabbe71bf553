//! Persistence of shopping items.
//!
//! # Design
//! Handlers only see `Arc<dyn ItemStore>`. The backend is chosen once at
//! startup by [`connect`]: MongoDB unless the configuration explicitly asks
//! for a process-local [`MemoryStore`]. Each operation touches exactly one
//! record; nothing spans items.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, StoreBackend};
use crate::model::{ItemFields, ShoppingItem};

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The identifier is not in the format the backend assigns.
    #[error("malformed item id: {0}")]
    InvalidId(String),

    #[error("database error: {0}")]
    Backend(#[from] mongodb::error::Error),
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in the backend's natural order.
    async fn list_all(&self) -> Result<Vec<ShoppingItem>, StoreError>;

    /// Insert a new item under a freshly assigned id.
    async fn create(&self, fields: ItemFields) -> Result<ShoppingItem, StoreError>;

    /// Replace the mutable fields of `id`. `Ok(None)` when no such item exists.
    async fn update_by_id(
        &self,
        id: &str,
        fields: ItemFields,
    ) -> Result<Option<ShoppingItem>, StoreError>;

    /// Remove `id`. Returns whether an item was actually removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;
}

/// Establish the store described by `config`.
///
/// A configured but unreachable MongoDB is an error so the process can stop
/// before it starts serving.
pub async fn connect(config: &Config) -> Result<Arc<dyn ItemStore>, StoreError> {
    match &config.store {
        StoreBackend::Mongo { uri, database } => {
            let store = MongoStore::connect(uri, database).await?;
            info!(%database, "connected to MongoDB");
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            warn!("ITEM_STORE=memory, items are kept in memory and lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
