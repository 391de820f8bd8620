//! Custom actions for the Order actor.
//!
//! Orders have no field-level update; status, priority and table only change through these
//! actions, handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{Order, OrderStatus, Priority};

/// Custom actions for Order entities.
///
/// Each carries an optional `expected_version`. When present, the action is rejected with
/// [`OrderError::VersionConflict`](super::OrderError::VersionConflict) unless the stored
/// order is still at that version.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order one step forward in the pipeline.
    ///
    /// # Errors
    /// Fails with `InvalidTransition` unless `to` is the immediate successor of the
    /// current status.
    Advance {
        to: OrderStatus,
        expected_version: Option<u64>,
    },
    /// Sets the priority tag. Allowed in every status.
    SetPriority {
        priority: Priority,
        expected_version: Option<u64>,
    },
    /// Seats the order at a table, or clears the table with `None`.
    AssignTable {
        table: Option<u32>,
        expected_version: Option<u64>,
    },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The order as committed after the status change.
    Advance(Order),
    /// The order as committed after the priority change.
    SetPriority(Order),
    /// The order as committed after the table change.
    AssignTable(Order),
}
