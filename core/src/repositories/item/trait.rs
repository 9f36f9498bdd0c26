//! Marketplace item repository trait

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::item::Item;
use crate::errors::DomainError;

/// Repository contract for marketplace items. Creator references are
/// resolved by the store so returned items carry the creator's summary.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items, newest first
    async fn list(&self) -> Result<Vec<Item>, DomainError>;

    /// Find an item by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError>;

    /// Persist a new item
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    /// Persist changes to an existing item
    async fn update(&self, item: Item) -> Result<Item, DomainError>;

    /// Delete an item. Returns false if it did not exist.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
