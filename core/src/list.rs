//! Client-side mirror of the shopping list.
//!
//! # Design
//! `ShoppingList` owns the local copy of the items, the draft for the next
//! item, and the running total. Every mutation goes to the server first and
//! the local copy is replaced with whatever record the server returns; no
//! client-side guess is ever merged in. Failures are logged and swallowed,
//! leaving local state as it was.

use tracing::{debug, warn};

use crate::client::ShoppingClient;
use crate::http::Transport;
use crate::prompt::{parse_amount, AmountPrompt};
use crate::types::{ItemFields, ShoppingItem};

#[derive(Debug, Clone)]
pub struct ShoppingList {
    client: ShoppingClient,
    items: Vec<ShoppingItem>,
    draft: String,
    total_amount: f64,
}

impl ShoppingList {
    pub fn new(client: ShoppingClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            draft: String::new(),
            total_amount: 0.0,
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Sum of every known amount; absent amounts count as zero.
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Replace the local items with the server's list.
    pub fn load<T: Transport>(&mut self, transport: &mut T) {
        let result = transport
            .execute(self.client.build_list_items())
            .and_then(|response| self.client.parse_list_items(response));
        match result {
            Ok(items) => {
                debug!(count = items.len(), "fetched items");
                self.items = items;
                self.recompute_total();
            }
            Err(e) => warn!("error fetching items: {e}"),
        }
    }

    /// Create an item from the draft. Blank drafts are ignored.
    pub fn add<T: Transport>(&mut self, transport: &mut T) {
        let name = self.draft.trim();
        if name.is_empty() {
            return;
        }
        let result = self
            .client
            .build_create_item(&ItemFields::new(name))
            .and_then(|request| transport.execute(request))
            .and_then(|response| self.client.parse_create_item(response));
        match result {
            Ok(item) => {
                self.items.push(item);
                self.draft.clear();
                self.recompute_total();
            }
            Err(e) => warn!("error creating item: {e}"),
        }
    }

    /// Flip `checked`. Checking an item without an amount asks for one first;
    /// a cancelled or non-numeric answer leaves it absent.
    pub fn toggle<T: Transport, P: AmountPrompt>(
        &mut self,
        id: &str,
        transport: &mut T,
        prompt: &mut P,
    ) {
        let Some(item) = self.item(id) else {
            return;
        };
        let mut fields = item.fields();
        fields.checked = !fields.checked;
        if fields.checked && fields.amount.is_none() {
            let message = format!("Enter amount spent on {}:", item.name);
            fields.amount = prompt.ask(&message, None).as_deref().and_then(parse_amount);
        }
        self.send_update(id, &fields, transport);
    }

    /// Ask for a new amount and store it. Cancelling sends nothing; a
    /// non-numeric answer clears the amount.
    pub fn edit_amount<T: Transport, P: AmountPrompt>(
        &mut self,
        id: &str,
        transport: &mut T,
        prompt: &mut P,
    ) {
        let Some(item) = self.item(id) else {
            return;
        };
        let message = format!("Enter new amount for {}:", item.name);
        let Some(answer) = prompt.ask(&message, item.amount) else {
            return;
        };
        let mut fields = item.fields();
        fields.amount = parse_amount(&answer);
        self.send_update(id, &fields, transport);
    }

    /// Delete an item. Any response removes it locally, whatever its status.
    pub fn remove<T: Transport>(&mut self, id: &str, transport: &mut T) {
        match transport.execute(self.client.build_delete_item(id)) {
            Ok(response) => {
                if let Err(e) = self.client.parse_delete_item(response) {
                    debug!(%id, "delete answered unexpectedly: {e}");
                }
                self.items.retain(|item| item.id != id);
                self.recompute_total();
            }
            Err(e) => warn!("error deleting item: {e}"),
        }
    }

    fn send_update<T: Transport>(&mut self, id: &str, fields: &ItemFields, transport: &mut T) {
        let result = self
            .client
            .build_update_item(id, fields)
            .and_then(|request| transport.execute(request))
            .and_then(|response| self.client.parse_update_item(response));
        match result {
            Ok(updated) => self.apply_update(id, updated),
            Err(e) => warn!("error updating item: {e}"),
        }
    }

    fn apply_update(&mut self, id: &str, updated: Option<ShoppingItem>) {
        match updated {
            Some(item) => {
                if let Some(slot) = self.items.iter_mut().find(|slot| slot.id == id) {
                    *slot = item;
                }
            }
            None => {
                debug!(%id, "item no longer exists on the server");
                self.items.retain(|item| item.id != id);
            }
        }
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total_amount = total_of(&self.items);
    }
}

/// Sum of every present amount in `items`. Starts from `+0.0`, so an empty
/// or amount-less list totals `0` and never `-0`.
pub fn total_of(items: &[ShoppingItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| item.amount)
        .fold(0.0, |total, amount| total + amount)
}
