//! # Menu Actor
//!
//! Owns the `menu` collection. Plain create / field-level update / delete; the catalog is
//! read by reporting to attribute revenue to categories.

pub mod entity;
pub mod error;

pub use entity::MenuAction;
pub use error::*;

use crate::clients::MenuClient;
use crate::framework::{Clock, ResourceActor};
use crate::model::MenuItem;
use std::sync::Arc;

/// Creates a new Menu actor and its client.
pub fn new(channel_capacity: usize, clock: Arc<dyn Clock>) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity, clock);
    (actor, MenuClient::new(generic_client))
}
