//! # Order Actor
//!
//! Owns the `orders` collection and enforces the order lifecycle.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for status and priority changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Lifecycle
//!
//! ```text
//! PENDING ──▶ PREPARING ──▶ READY ──▶ DELIVERED
//! ```
//!
//! Only single forward steps are accepted. Priority may be changed in any status and never
//! touches the status. Removal (`delete`) is a separate, destructive operation and is not a
//! lifecycle state.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderUpdate;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::{Clock, ResourceActor};
use crate::model::Order;
use std::sync::Arc;

/// Creates a new Order actor and its client.
pub fn new(channel_capacity: usize, clock: Arc<dyn Clock>) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity, clock);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
