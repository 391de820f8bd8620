//! [`ActorEntity`] implementation for [`Order`].
//!
//! Enforces the forward-only status pipeline and the version check on every action.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Orders have no field-level update; see [`OrderAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderUpdate {}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        created_at: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        validate(&params)?;
        Ok(Order::new(id, params, created_at))
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), OrderError> {
        match update {}
    }

    /// # Actions
    /// - `Advance`: one step along PENDING → PREPARING → READY → DELIVERED
    /// - `SetPriority`: replaces the priority tag, status untouched
    /// - `AssignTable`: moves the order to another table or clears it
    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Advance {
                to,
                expected_version,
            } => {
                self.check_version(expected_version)?;
                if self.status.successor() != Some(to) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to,
                    });
                }
                self.status = to;
                self.version += 1;
                Ok(OrderActionResult::Advance(self.clone()))
            }
            OrderAction::SetPriority {
                priority,
                expected_version,
            } => {
                self.check_version(expected_version)?;
                self.priority = Some(priority);
                self.version += 1;
                Ok(OrderActionResult::SetPriority(self.clone()))
            }
            OrderAction::AssignTable {
                table,
                expected_version,
            } => {
                self.check_version(expected_version)?;
                if table == Some(0) {
                    return Err(invalid_table());
                }
                self.table_number = table;
                self.version += 1;
                Ok(OrderActionResult::AssignTable(self.clone()))
            }
        }
    }
}

impl Order {
    fn check_version(&self, expected: Option<u64>) -> Result<(), OrderError> {
        match expected {
            Some(expected) if expected != self.version => Err(OrderError::VersionConflict {
                expected,
                actual: self.version,
            }),
            _ => Ok(()),
        }
    }
}

fn validate(params: &OrderCreate) -> Result<(), OrderError> {
    if params.items.trim().is_empty() {
        return Err(OrderError::Validation(
            "Please fill in items and total".to_string(),
        ));
    }
    if params.total.is_sign_negative() && !params.total.is_zero() {
        return Err(OrderError::Validation(
            "Total must not be negative".to_string(),
        ));
    }
    if params.table_number == Some(0) {
        return Err(invalid_table());
    }
    if params.prep_minutes == Some(0) {
        return Err(OrderError::Validation(
            "Preparation time must be a positive whole number".to_string(),
        ));
    }
    if let Some(line) = params.lines.iter().find(|line| line.quantity == 0) {
        return Err(OrderError::Validation(format!(
            "Quantity for {} must be at least 1",
            line.name
        )));
    }
    Ok(())
}

fn invalid_table() -> OrderError {
    OrderError::Validation("Table number must be a positive whole number".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderStatus, Priority};
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn order() -> Order {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Order::from_create_params(OrderId(1), OrderCreate::new("Kottu", Decimal::from(850)), at)
            .unwrap()
    }

    fn advance(to: OrderStatus, expected_version: Option<u64>) -> OrderAction {
        OrderAction::Advance {
            to,
            expected_version,
        }
    }

    #[tokio::test]
    async fn test_assign_table_moves_and_clears() {
        let mut order = order();
        let assign = |table, expected_version| OrderAction::AssignTable {
            table,
            expected_version,
        };

        order.handle_action(assign(Some(6), Some(0)), &()).await.unwrap();
        assert_eq!(order.table_number, Some(6));
        assert_eq!(order.version, 1);

        let before = order.clone();
        let err = order.handle_action(assign(Some(0), None), &()).await.unwrap_err();
        assert_eq!(err, invalid_table());
        let err = order.handle_action(assign(Some(2), Some(0)), &()).await.unwrap_err();
        assert_eq!(
            err,
            OrderError::VersionConflict {
                expected: 0,
                actual: 1
            }
        );
        assert_eq!(order, before);

        order.handle_action(assign(None, Some(1)), &()).await.unwrap();
        assert_eq!(order.table_number, None);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_advance_walks_the_pipeline() {
        let mut order = order();
        for to in [
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Delivered,
        ] {
            order.handle_action(advance(to, None), &()).await.unwrap();
            assert_eq!(order.status, to);
        }
        assert_eq!(order.version, 3);
    }

    #[tokio::test]
    async fn test_advance_rejects_skips_and_backward_moves() {
        let mut order = order();
        let err = order
            .handle_action(advance(OrderStatus::Ready, None), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready
            }
        );

        let err = order
            .handle_action(advance(OrderStatus::Pending, None), &())
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn test_stale_version_is_rejected() {
        let mut order = order();
        order
            .handle_action(advance(OrderStatus::Preparing, Some(0)), &())
            .await
            .unwrap();

        let err = order
            .handle_action(advance(OrderStatus::Ready, Some(0)), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            OrderError::VersionConflict {
                expected: 0,
                actual: 1
            }
        );
    }

    #[tokio::test]
    async fn test_set_priority_keeps_status() {
        let mut order = order();
        let result = order
            .handle_action(
                OrderAction::SetPriority {
                    priority: Priority::High,
                    expected_version: None,
                },
                &(),
            )
            .await
            .unwrap();
        match result {
            OrderActionResult::SetPriority(updated) => {
                assert_eq!(updated.priority, Some(Priority::High));
                assert_eq!(updated.status, OrderStatus::Pending);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_create_validation() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let blank = OrderCreate::new("  ", Decimal::from(1));
        assert!(matches!(
            Order::from_create_params(OrderId(1), blank, at),
            Err(OrderError::Validation(_))
        ));
        let negative = OrderCreate::new("Tea", Decimal::from(-1));
        assert!(matches!(
            Order::from_create_params(OrderId(1), negative, at),
            Err(OrderError::Validation(_))
        ));
        let no_table = OrderCreate::new("Tea", Decimal::from(1)).table(0);
        assert!(matches!(
            Order::from_create_params(OrderId(1), no_table, at),
            Err(OrderError::Validation(_))
        ));
    }
}
