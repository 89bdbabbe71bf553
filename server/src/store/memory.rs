use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ItemStore, StoreError};
use crate::model::{ItemFields, ShoppingItem};

/// In-process store keeping items in insertion order.
///
/// Ids are random UUIDs, so a deleted id is never handed out again.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<ShoppingItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn parse_id(id: &str) -> Result<String, StoreError> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<ShoppingItem>, StoreError> {
        Ok(self.items.read().await.clone())
    }

    async fn create(&self, fields: ItemFields) -> Result<ShoppingItem, StoreError> {
        let item = fields.into_item(Uuid::new_v4().to_string());
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: ItemFields,
    ) -> Result<Option<ShoppingItem>, StoreError> {
        let id = parse_id(id)?;
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.name = fields.name;
        item.checked = fields.checked;
        item.amount = fields.amount;
        Ok(Some(item.clone()))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let id = parse_id(id)?;
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, checked: bool, amount: Option<f64>) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            checked,
            amount,
        }
    }

    #[tokio::test]
    async fn create_assigns_unique_ids_in_insertion_order() {
        let store = MemoryStore::new();
        let a = store.create(ItemFields::new("Bread")).await.unwrap();
        let b = store.create(ItemFields::new("Bread")).await.unwrap();
        assert_ne!(a.id, b.id);

        let items = store.list_all().await.unwrap();
        assert_eq!(items, vec![a, b]);
    }

    #[tokio::test]
    async fn update_replaces_all_mutable_fields() {
        let store = MemoryStore::new();
        let created = store.create(fields("Milk", true, Some(1.0))).await.unwrap();
        let other = store.create(ItemFields::new("Eggs")).await.unwrap();

        let updated = store
            .update_by_id(&created.id, fields("Oat milk", false, None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Oat milk");
        assert!(!updated.checked);
        assert!(updated.amount.is_none());

        let items = store.list_all().await.unwrap();
        assert_eq!(items, vec![updated, other]);
    }

    #[tokio::test]
    async fn update_unknown_id_changes_nothing() {
        let store = MemoryStore::new();
        let created = store.create(ItemFields::new("Milk")).await.unwrap();

        let result = store
            .update_by_id(&Uuid::new_v4().to_string(), fields("Ghost", true, Some(9.0)))
            .await
            .unwrap();
        assert!(result.is_none());
        assert_eq!(store.list_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn delete_reports_whether_item_existed() {
        let store = MemoryStore::new();
        let created = store.create(ItemFields::new("Milk")).await.unwrap();

        assert!(store.delete_by_id(&created.id).await.unwrap());
        assert!(!store.delete_by_id(&created.id).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_id_is_an_error() {
        let store = MemoryStore::new();
        let err = store.delete_by_id("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(id) if id == "not-a-uuid"));

        let err = store
            .update_by_id("not-a-uuid", ItemFields::new("Milk"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }
}
