//! Custom actions for the Inventory actor.

use crate::model::StockStatus;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Adds `delta` to the quantity on hand (negative to use stock up). The result is
    /// clamped at zero. A positive delta counts as a restock.
    AdjustQuantity(Decimal),
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    /// New quantity and the status it implies.
    AdjustQuantity {
        quantity: Decimal,
        status: StockStatus,
    },
}
