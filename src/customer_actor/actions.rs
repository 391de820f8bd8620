//! Custom actions for the Customer actor.

use crate::model::CustomerTier;
use rust_decimal::Decimal;

/// Loyalty bookkeeping. Both actions recompute the tier from the new spend total.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Credits loyalty points. Each point also counts as Rs. 10 of spend.
    AddLoyaltyPoints(u32),
    /// Records a paid visit of the given amount.
    RecordVisit(Decimal),
}

/// Results from CustomerActions - variants match 1:1 with CustomerAction
#[derive(Debug, Clone, PartialEq)]
pub enum CustomerActionResult {
    /// New points balance and tier.
    AddLoyaltyPoints { points: u32, tier: CustomerTier },
    /// New visit count and tier.
    RecordVisit { total_orders: u32, tier: CustomerTier },
}
