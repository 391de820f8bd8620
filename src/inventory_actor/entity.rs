//! [`ActorEntity`] implementation for [`InventoryItem`].

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::framework::{ActorEntity, Clock};
use crate::model::{InventoryItem, InventoryItemCreate, InventoryItemId, InventoryItemUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;

#[async_trait]
impl ActorEntity for InventoryItem {
    type Id = InventoryItemId;
    type Create = InventoryItemCreate;
    type Update = InventoryItemUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = Arc<dyn Clock>;
    type Error = InventoryError;

    fn from_create_params(
        id: InventoryItemId,
        params: InventoryItemCreate,
        created_at: DateTime<Utc>,
    ) -> Result<Self, InventoryError> {
        check_name(&params.name)?;
        check_amount(params.quantity, "Quantity")?;
        check_amount(params.low_stock_threshold, "Low stock threshold")?;
        if let Some(cost) = params.cost_per_unit {
            check_amount(cost, "Cost per unit")?;
        }
        Ok(InventoryItem::new(id, params, created_at))
    }

    async fn on_update(
        &mut self,
        update: InventoryItemUpdate,
        _ctx: &Arc<dyn Clock>,
    ) -> Result<(), InventoryError> {
        if let Some(name) = update.name {
            check_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(category) = update.category {
            self.category = category.trim().to_string();
        }
        if let Some(unit) = update.unit {
            self.unit = unit;
        }
        if let Some(threshold) = update.low_stock_threshold {
            check_amount(threshold, "Low stock threshold")?;
            self.low_stock_threshold = threshold;
        }
        if let Some(supplier) = update.supplier {
            self.supplier = Some(supplier).filter(|s| !s.trim().is_empty());
        }
        if let Some(cost) = update.cost_per_unit {
            check_amount(cost, "Cost per unit")?;
            self.cost_per_unit = Some(cost);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        clock: &Arc<dyn Clock>,
    ) -> Result<InventoryActionResult, InventoryError> {
        match action {
            InventoryAction::AdjustQuantity(delta) => {
                let quantity = self.quantity.checked_add(delta).ok_or_else(|| {
                    InventoryError::Validation("Quantity is too large".to_string())
                })?;
                self.quantity = quantity.max(Decimal::ZERO);
                if delta > Decimal::ZERO {
                    self.last_restocked = Some(clock.now());
                }
                Ok(InventoryActionResult::AdjustQuantity {
                    quantity: self.quantity,
                    status: self.status(),
                })
            }
        }
    }
}

fn check_name(name: &str) -> Result<(), InventoryError> {
    if name.trim().is_empty() {
        return Err(InventoryError::Validation("Please enter a name".to_string()));
    }
    Ok(())
}

fn check_amount(amount: Decimal, field: &str) -> Result<(), InventoryError> {
    if amount < Decimal::ZERO {
        return Err(InventoryError::Validation(format!(
            "{} must not be negative",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ManualClock;
    use crate::model::{StockStatus, StockUnit};
    use chrono::{Duration, TimeZone};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    fn onions() -> InventoryItem {
        InventoryItem::from_create_params(
            InventoryItemId(1),
            InventoryItemCreate::new("Onions", Decimal::from(3), StockUnit::Kilogram, Decimal::from(2))
                .category("Vegetables"),
            start(),
        )
        .unwrap()
    }

    #[test]
    fn test_create_rejects_negative_amounts_and_blank_names() {
        let blank = InventoryItemCreate::new(" ", Decimal::ONE, StockUnit::Pieces, Decimal::ONE);
        assert_eq!(
            InventoryItem::from_create_params(InventoryItemId(1), blank, start()).unwrap_err(),
            InventoryError::Validation("Please enter a name".into())
        );

        let negative =
            InventoryItemCreate::new("Eggs", Decimal::NEGATIVE_ONE, StockUnit::Dozen, Decimal::ONE);
        assert_eq!(
            InventoryItem::from_create_params(InventoryItemId(1), negative, start()).unwrap_err(),
            InventoryError::Validation("Quantity must not be negative".into())
        );

        let item = onions();
        assert_eq!(item.last_restocked, Some(start()));
        assert_eq!(item.status(), StockStatus::Good);
    }

    #[tokio::test]
    async fn test_adjust_quantity_clamps_and_stamps_restocks() {
        let manual = ManualClock::new(start());
        let clock: Arc<dyn Clock> = Arc::new(manual.clone());
        let mut item = onions();

        manual.advance(Duration::hours(2));
        let used = item
            .handle_action(InventoryAction::AdjustQuantity(Decimal::from(-1)), &clock)
            .await
            .unwrap();
        assert_eq!(
            used,
            InventoryActionResult::AdjustQuantity {
                quantity: Decimal::from(2),
                status: StockStatus::Low,
            }
        );
        assert_eq!(item.last_restocked, Some(start()));

        let emptied = item
            .handle_action(InventoryAction::AdjustQuantity(Decimal::from(-5)), &clock)
            .await
            .unwrap();
        assert_eq!(
            emptied,
            InventoryActionResult::AdjustQuantity {
                quantity: Decimal::ZERO,
                status: StockStatus::Out,
            }
        );

        item.handle_action(InventoryAction::AdjustQuantity(Decimal::from(10)), &clock)
            .await
            .unwrap();
        assert_eq!(item.quantity, Decimal::from(10));
        assert_eq!(item.last_restocked, Some(start() + Duration::hours(2)));

        let err = item
            .handle_action(InventoryAction::AdjustQuantity(Decimal::MAX), &clock)
            .await
            .unwrap_err();
        assert_eq!(err, InventoryError::Validation("Quantity is too large".into()));
    }

    #[tokio::test]
    async fn test_update_keeps_quantity() {
        let clock: Arc<dyn Clock> = Arc::new(ManualClock::new(start()));
        let mut item = onions();
        item.on_update(
            InventoryItemUpdate {
                low_stock_threshold: Some(Decimal::from(5)),
                supplier: Some("Dambulla Market".into()),
                ..InventoryItemUpdate::default()
            },
            &clock,
        )
        .await
        .unwrap();
        assert_eq!(item.quantity, Decimal::from(3));
        assert_eq!(item.status(), StockStatus::Low);
        assert_eq!(item.supplier.as_deref(), Some("Dambulla Market"));

        let err = item
            .on_update(
                InventoryItemUpdate {
                    cost_per_unit: Some(Decimal::from(-1)),
                    ..InventoryItemUpdate::default()
                },
                &clock,
            )
            .await
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::Validation("Cost per unit must not be negative".into())
        );
    }
}
