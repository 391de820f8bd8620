//! # Customer Actor
//!
//! Owns the `customers` collection with loyalty bookkeeping.
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Customer`]
//! - [`actions`] - [`CustomerAction`] for points and visits
//! - [`error`] - [`CustomerError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CustomerClient;
use crate::framework::{Clock, ResourceActor};
use crate::model::Customer;
use std::sync::Arc;

/// Creates a new Customer actor and its client.
pub fn new(channel_capacity: usize, clock: Arc<dyn Clock>) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity, clock);
    (actor, CustomerClient::new(generic_client))
}
