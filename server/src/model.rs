use serde::{Deserialize, Serialize};

/// A single entry on the shopping list as stored and served by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub checked: bool,
    pub amount: Option<f64>,
}

/// Mutable fields of an item. Used as the body of both create and update;
/// on update every field is replaced, so an omitted `amount` clears it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
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

    /// Reject payloads that would break the item invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        match self.amount {
            Some(amount) if !amount.is_finite() => Err("amount must be a finite number".to_string()),
            Some(amount) if amount < 0.0 => Err("amount must not be negative".to_string()),
            _ => Ok(()),
        }
    }

    pub(crate) fn into_item(self, id: String) -> ShoppingItem {
        ShoppingItem {
            id,
            name: self.name,
            checked: self.checked,
            amount: self.amount,
        }
    }
}

/// Body returned by the delete endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn item_deleted() -> Self {
        Self {
            message: "Item deleted".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_absent_amount_as_null() {
        let item = ItemFields::new("Bread").into_item("abc".to_string());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["name"], "Bread");
        assert_eq!(json["checked"], false);
        assert!(json["amount"].is_null());
        assert!(json.as_object().unwrap().contains_key("amount"));
    }

    #[test]
    fn fields_default_checked_and_amount() {
        let input: ItemFields = serde_json::from_str(r#"{"name":"Eggs"}"#).unwrap();
        assert_eq!(input, ItemFields::new("Eggs"));
    }

    #[test]
    fn fields_accept_explicit_values_and_ignore_id() {
        let input: ItemFields =
            serde_json::from_str(r#"{"id":"x","name":"Milk","checked":true,"amount":3.5}"#).unwrap();
        assert_eq!(input.name, "Milk");
        assert!(input.checked);
        assert_eq!(input.amount, Some(3.5));
    }

    #[test]
    fn fields_accept_null_amount() {
        let input: ItemFields = serde_json::from_str(r#"{"name":"Milk","amount":null}"#).unwrap();
        assert!(input.amount.is_none());
    }

    #[test]
    fn fields_reject_missing_name() {
        let result: Result<ItemFields, _> = serde_json::from_str(r#"{"checked":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_blank_name() {
        assert!(ItemFields::new("   ").validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_amount() {
        let mut fields = ItemFields::new("Milk");
        fields.amount = Some(-1.0);
        assert!(fields.validate().is_err());
        fields.amount = Some(0.0);
        assert!(fields.validate().is_ok());
    }
}
