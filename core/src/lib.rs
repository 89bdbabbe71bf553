//! Client core for the shopping list.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). [`ShoppingList`] layers the
//! client state on top: the local item mirror, the draft, and the derived
//! total, kept in sync through a host-supplied [`Transport`].
//!
//! # Design
//! - `ShoppingClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - Amount entry is the [`AmountPrompt`] capability, so a terminal prompt,
//!   a modal, or a test stub can drive the same mutation logic.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod list;
pub mod prompt;
pub mod types;

pub use client::ShoppingClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use list::{total_of, ShoppingList};
pub use prompt::{parse_amount, AmountPrompt};
pub use types::{DeleteConfirmation, ItemFields, ShoppingItem};
