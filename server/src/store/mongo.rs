use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::{ItemStore, StoreError};
use crate::model::{ItemFields, ShoppingItem};

/// Collection name used by earlier deployments of the list, kept so their
/// data stays readable.
const COLLECTION: &str = "shoppingitems";

/// Document layout in the `shoppingitems` collection.
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    checked: bool,
    amount: Option<f64>,
}

impl ItemDocument {
    fn into_item(self) -> ShoppingItem {
        ShoppingItem {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: self.name,
            checked: self.checked,
            amount: self.amount,
        }
    }
}

pub struct MongoStore {
    items: Collection<ItemDocument>,
}

impl MongoStore {
    /// Open a client for `uri` and verify the server answers a `ping`.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;
        Ok(Self {
            items: db.collection(COLLECTION),
        })
    }
}

fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

#[async_trait]
impl ItemStore for MongoStore {
    async fn list_all(&self) -> Result<Vec<ShoppingItem>, StoreError> {
        let cursor = self.items.find(doc! {}).await?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(ItemDocument::into_item).collect())
    }

    async fn create(&self, fields: ItemFields) -> Result<ShoppingItem, StoreError> {
        let id = ObjectId::new();
        let document = ItemDocument {
            id: Some(id),
            name: fields.name,
            checked: fields.checked,
            amount: fields.amount,
        };
        self.items.insert_one(&document).await?;
        Ok(document.into_item())
    }

    async fn update_by_id(
        &self,
        id: &str,
        fields: ItemFields,
    ) -> Result<Option<ShoppingItem>, StoreError> {
        let oid = parse_id(id)?;
        let update = doc! {
            "$set": {
                "name": fields.name,
                "checked": fields.checked,
                "amount": fields.amount,
            }
        };
        let updated = self
            .items
            .find_one_and_update(doc! { "_id": oid }, update)
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(ItemDocument::into_item))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        let oid = parse_id(id)?;
        let result = self.items.delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }
}
