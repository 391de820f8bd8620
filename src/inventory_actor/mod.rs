//! # Inventory Actor
//!
//! Owns the `inventory` collection. Descriptive fields are edited field by field; stock
//! levels move only through [`InventoryAction::AdjustQuantity`].
//!
//! Unlike the other collections this actor takes a context: the [`Clock`] used to stamp
//! restocks, injected through `run(clock)`.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::framework::{Clock, ResourceActor};
use crate::model::InventoryItem;
use std::sync::Arc;

/// Creates a new Inventory actor and its client.
pub fn new(
    channel_capacity: usize,
    clock: Arc<dyn Clock>,
) -> (ResourceActor<InventoryItem>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity, clock);
    (actor, InventoryClient::new(generic_client))
}
