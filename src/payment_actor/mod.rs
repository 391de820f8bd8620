//! # Payment Actor
//!
//! Owns the `payments` collection: an append-only log of order settlements. Create,
//! read and subscribe only; update is impossible and delete is vetoed by the record.

pub mod entity;
pub mod error;

pub use entity::PaymentAction;
pub use error::*;

use crate::clients::PaymentClient;
use crate::framework::{Clock, ResourceActor};
use crate::model::Payment;
use std::sync::Arc;

/// Creates a new Payment actor and its client.
pub fn new(channel_capacity: usize, clock: Arc<dyn Clock>) -> (ResourceActor<Payment>, PaymentClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity, clock);
    (actor, PaymentClient::new(generic_client))
}
