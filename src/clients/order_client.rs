//! # Order Client
//!
//! High-level API over the `Order` actor: placing orders and moving them through the
//! kitchen pipeline.

use crate::clients::actor_client::ActorClient;
use crate::model::{Order, OrderCreate, OrderDraft, OrderId, OrderStatus, Priority};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use tracing::{debug, instrument};

domain_client!(Order => Order);

impl OrderClient {
    /// Places a validated order. The store assigns id and creation time.
    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "place_order called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Validates raw form input and places the order. Nothing is written when validation
    /// fails.
    #[instrument(skip(self, draft))]
    pub async fn place_draft(&self, draft: &OrderDraft) -> Result<OrderId, OrderError> {
        let params = draft.validate().map_err(OrderError::Validation)?;
        self.place_order(params).await
    }

    /// Moves an order one step forward.
    ///
    /// Pass the version last seen to reject the change if someone else got there first.
    #[instrument(skip(self))]
    pub async fn advance(
        &self,
        id: OrderId,
        to: OrderStatus,
        expected_version: Option<u64>,
    ) -> Result<Order, OrderError> {
        debug!("Advancing order {} to {}", id, to);
        match self
            .inner
            .perform_action(
                id,
                OrderAction::Advance {
                    to,
                    expected_version,
                },
            )
            .await
        {
            Ok(OrderActionResult::Advance(order)) => Ok(order),
            Ok(_) => unreachable!("Advance action must return Advance result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Sets the priority tag; the status is left alone.
    #[instrument(skip(self))]
    pub async fn set_priority(
        &self,
        id: OrderId,
        priority: Priority,
        expected_version: Option<u64>,
    ) -> Result<Order, OrderError> {
        debug!("Setting priority of order {} to {}", id, priority);
        match self
            .inner
            .perform_action(
                id,
                OrderAction::SetPriority {
                    priority,
                    expected_version,
                },
            )
            .await
        {
            Ok(OrderActionResult::SetPriority(order)) => Ok(order),
            Ok(_) => unreachable!("SetPriority action must return SetPriority result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Seats the order at `table`, or clears its table with `None`.
    #[instrument(skip(self))]
    pub async fn assign_table(
        &self,
        id: OrderId,
        table: Option<u32>,
        expected_version: Option<u64>,
    ) -> Result<Order, OrderError> {
        debug!("Assigning order {} to table {:?}", id, table);
        match self
            .inner
            .perform_action(
                id,
                OrderAction::AssignTable {
                    table,
                    expected_version,
                },
            )
            .await
        {
            Ok(OrderActionResult::AssignTable(order)) => Ok(order),
            Ok(_) => unreachable!("AssignTable action must return AssignTable result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
