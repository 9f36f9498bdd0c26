//! Mock implementation of ItemRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::item::Item;
use crate::errors::DomainError;

use super::trait_::ItemRepository;

/// In-memory item repository for tests
#[derive(Default)]
pub struct MockItemRepository {
    items: Arc<RwLock<HashMap<Uuid, Item>>>,
}

impl MockItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for MockItemRepository {
    async fn list(&self) -> Result<Vec<Item>, DomainError> {
        let items = self.items.read().await;
        let mut all: Vec<Item> = items.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, DomainError> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let mut items = self.items.write().await;
        if !items.contains_key(&item.id) {
            return Err(DomainError::not_found("Item"));
        }
        items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        Ok(items.remove(&id).is_some())
    }
}
