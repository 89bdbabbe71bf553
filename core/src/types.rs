//! Domain DTOs for the shopping list API.
//!
//! # Design
//! These mirror the server's schema but are defined independently so the
//! client core carries no server dependencies. Integration tests catch
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single shopping item as returned by the API.
///
/// `_id` is accepted as an alias for `id` so records served by a
/// MongoDB-style backend decode as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl ShoppingItem {
    /// The item's mutable fields, ready to send as an update body.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            name: self.name.clone(),
            checked: self.checked,
            amount: self.amount,
        }
    }
}

/// Request payload for both create and update. Update replaces every field,
/// so `amount: None` is sent as `null` and clears a stored amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemFields {
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl ItemFields {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
            amount: None,
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub message: String,
}
