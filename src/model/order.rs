//! Customer orders and their status / priority vocabulary.
//!
//! [`Order`] implements [`ActorEntity`](crate::framework::ActorEntity) in
//! [`order_actor::entity`](crate::order_actor::entity); state changes go through
//! [`OrderAction`](crate::order_actor::OrderAction).

use crate::model::{MenuItem, MenuItemId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Name recorded when an order is placed without a customer name.
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in the kitchen/service pipeline.
///
/// Serialized upper-case. Parsing and deserializing accept any casing, so stored
/// `"pending"` and `"PENDING"` are the same status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
    ];

    /// The only status this one may advance to. `None` for the terminal status.
    pub fn successor(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    /// Whether the order still belongs on the kitchen display.
    pub fn is_active(self) -> bool {
        !matches!(self, OrderStatus::Delivered)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown order status '{}'", s))
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Staff-assigned urgency, independent of how long the order has been waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    /// Sort rank: high sorts first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Normal => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "normal" => Ok(Priority::Normal),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One structured line of an order, referencing a menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderLine {
    /// `quantity` of `item` at its current menu price.
    pub fn of(item: &MenuItem, quantity: u32) -> Self {
        Self {
            menu_item_id: item.id,
            name: item.name.clone(),
            quantity,
            unit_price: item.price,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    /// Free-text item description as typed by staff, e.g. "2x Kottu, 1x Fried Rice".
    pub items: String,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub table_number: Option<u32>,
    pub priority: Option<Priority>,
    pub prep_minutes: Option<u32>,
    /// Bumped on every committed change; used as an optimistic-concurrency token.
    pub version: u64,
}

impl Order {
    /// Builds a fresh `Pending` order at version 0.
    pub fn new(id: OrderId, params: OrderCreate, created_at: DateTime<Utc>) -> Self {
        let customer_name = params
            .customer_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| WALK_IN_CUSTOMER.to_string());

        Self {
            id,
            customer_name,
            items: params.items,
            lines: params.lines,
            total: params.total,
            status: OrderStatus::Pending,
            created_at,
            table_number: params.table_number,
            priority: params.priority,
            prep_minutes: params.prep_minutes,
            version: 0,
        }
    }

    /// Priority with the absent case resolved to `Normal`.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}

/// Validated payload for creating an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub customer_name: Option<String>,
    pub items: String,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub table_number: Option<u32>,
    pub priority: Option<Priority>,
    pub prep_minutes: Option<u32>,
}

impl OrderCreate {
    /// A minimal order: free-text items and a total.
    pub fn new(items: impl Into<String>, total: Decimal) -> Self {
        Self {
            customer_name: None,
            items: items.into(),
            lines: Vec::new(),
            total,
            table_number: None,
            priority: None,
            prep_minutes: None,
        }
    }

    /// Builds an order from structured lines. The description and total are derived from them.
    pub fn from_lines(lines: Vec<OrderLine>) -> Self {
        let items = lines
            .iter()
            .map(|line| format!("{}x {}", line.quantity, line.name))
            .collect::<Vec<_>>()
            .join(", ");
        let total = lines
            .iter()
            .map(OrderLine::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Self {
            lines,
            ..Self::new(items, total)
        }
    }

    pub fn customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn table(mut self, table_number: u32) -> Self {
        self.table_number = Some(table_number);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn prep_minutes(mut self, minutes: u32) -> Self {
        self.prep_minutes = Some(minutes);
        self
    }
}

/// Raw order-entry form input, before validation.
///
/// Every field is kept as typed so that malformed input can be reported instead of
/// silently coerced. See [`OrderDraft::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    pub items: String,
    pub total: String,
    pub table_number: String,
    pub priority: String,
    pub prep_minutes: String,
}

impl OrderDraft {
    /// Checks required fields and parses numbers. Returns a message fit for the user.
    pub fn validate(&self) -> Result<OrderCreate, String> {
        if self.items.trim().is_empty() || self.total.trim().is_empty() {
            return Err("Please fill in items and total".to_string());
        }
        let total = Decimal::from_str(self.total.trim())
            .map_err(|_| "Total must be a number".to_string())?;
        if total.is_sign_negative() && !total.is_zero() {
            return Err("Total must not be negative".to_string());
        }

        let table_number = parse_optional_positive(&self.table_number, "Table number")?;
        let prep_minutes = parse_optional_positive(&self.prep_minutes, "Preparation time")?;
        let priority = match self.priority.trim() {
            "" => None,
            raw => Some(raw.parse::<Priority>()?),
        };

        Ok(OrderCreate {
            customer_name: Some(self.customer_name.clone()).filter(|n| !n.trim().is_empty()),
            items: self.items.trim().to_string(),
            lines: Vec::new(),
            total,
            table_number,
            priority,
            prep_minutes,
        })
    }
}

fn parse_optional_positive(raw: &str, field: &str) -> Result<Option<u32>, String> {
    match raw.trim() {
        "" => Ok(None),
        value => match value.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(format!("{} must be a positive whole number", field)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(items: &str, total: &str) -> OrderDraft {
        OrderDraft {
            items: items.to_string(),
            total: total.to_string(),
            ..OrderDraft::default()
        }
    }

    #[test]
    fn status_parsing_ignores_case() {
        assert_eq!("pending".parse::<OrderStatus>(), Ok(OrderStatus::Pending));
        assert_eq!("PREPARING".parse::<OrderStatus>(), Ok(OrderStatus::Preparing));
        assert_eq!(" Ready ".parse::<OrderStatus>(), Ok(OrderStatus::Ready));
        assert!("active".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn status_serializes_upper_case() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"DELIVERED\"");
        let priority = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(priority, "\"high\"");
    }

    #[test]
    fn stored_values_deserialize_in_any_case() {
        for raw in ["\"pending\"", "\"PENDING\"", "\"Pending\""] {
            let status: OrderStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, OrderStatus::Pending);
        }
        let status: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
        assert!(serde_json::from_str::<OrderStatus>("\"served\"").is_err());

        let priority: Priority = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(priority, Priority::High);

        let json = serde_json::to_string(&OrderStatus::Ready).unwrap();
        assert_eq!(serde_json::from_str::<OrderStatus>(&json).unwrap(), OrderStatus::Ready);
    }

    #[test]
    fn successor_chain_ends_at_delivered() {
        assert_eq!(OrderStatus::Pending.successor(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.successor(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.successor(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.successor(), None);
    }

    #[test]
    fn draft_requires_items_and_total() {
        assert_eq!(
            draft("", "10").validate(),
            Err("Please fill in items and total".to_string())
        );
        assert_eq!(
            draft("Kottu", "  ").validate(),
            Err("Please fill in items and total".to_string())
        );
    }

    #[test]
    fn draft_rejects_non_numeric_and_negative_totals() {
        assert_eq!(
            draft("Kottu", "ten").validate(),
            Err("Total must be a number".to_string())
        );
        assert_eq!(
            draft("Kottu", "-1").validate(),
            Err("Total must not be negative".to_string())
        );
    }

    #[test]
    fn draft_parses_optional_fields() {
        let input = OrderDraft {
            customer_name: "Nimal".into(),
            items: " 2x Kottu ".into(),
            total: "1250.50".into(),
            table_number: "4".into(),
            priority: "HIGH".into(),
            prep_minutes: "20".into(),
        };
        let create = input.validate().unwrap();
        assert_eq!(create.customer_name.as_deref(), Some("Nimal"));
        assert_eq!(create.items, "2x Kottu");
        assert_eq!(create.total, Decimal::new(125050, 2));
        assert_eq!(create.table_number, Some(4));
        assert_eq!(create.priority, Some(Priority::High));
        assert_eq!(create.prep_minutes, Some(20));

        let bad_table = OrderDraft {
            table_number: "0".into(),
            ..draft("Kottu", "5")
        };
        assert!(bad_table.validate().is_err());
    }

    #[test]
    fn new_order_defaults() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        let order = Order::new(OrderId(1), OrderCreate::new("Tea", Decimal::from(100)), at);
        assert_eq!(order.customer_name, WALK_IN_CUSTOMER);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.effective_priority(), Priority::Normal);
        assert_eq!(order.prep_minutes, None);
        assert_eq!(order.version, 0);
    }

    #[test]
    fn lines_derive_description_and_total() {
        let create = OrderCreate::from_lines(vec![
            OrderLine {
                menu_item_id: MenuItemId(1),
                name: "Kottu".into(),
                quantity: 2,
                unit_price: Decimal::from(850),
            },
            OrderLine {
                menu_item_id: MenuItemId(2),
                name: "Coca Cola".into(),
                quantity: 1,
                unit_price: Decimal::from(200),
            },
        ]);
        assert_eq!(create.items, "2x Kottu, 1x Coca Cola");
        assert_eq!(create.total, Decimal::from(1900));
    }
}
