//! Stock on hand: ingredients, drinks and supplies, with their low-stock thresholds.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for InventoryItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InventoryItemId(pub u32);

impl From<u32> for InventoryItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for InventoryItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "inventory_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StockUnit {
    #[default]
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "L")]
    Litre,
    #[serde(rename = "mL")]
    Millilitre,
    #[serde(rename = "pcs")]
    Pieces,
    #[serde(rename = "dozen")]
    Dozen,
}

impl StockUnit {
    pub const ALL: [StockUnit; 6] = [
        StockUnit::Kilogram,
        StockUnit::Gram,
        StockUnit::Litre,
        StockUnit::Millilitre,
        StockUnit::Pieces,
        StockUnit::Dozen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StockUnit::Kilogram => "kg",
            StockUnit::Gram => "g",
            StockUnit::Litre => "L",
            StockUnit::Millilitre => "mL",
            StockUnit::Pieces => "pcs",
            StockUnit::Dozen => "dozen",
        }
    }
}

impl Display for StockUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StockUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown unit '{}'", s))
    }
}

/// Stock level relative to the item's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Good,
    Low,
    Out,
}

impl StockStatus {
    /// `Out` at zero, `Low` at or below the threshold, otherwise `Good`.
    pub fn of(quantity: Decimal, low_stock_threshold: Decimal) -> Self {
        if quantity <= Decimal::ZERO {
            StockStatus::Out
        } else if quantity <= low_stock_threshold {
            StockStatus::Low
        } else {
            StockStatus::Good
        }
    }

    /// Indicator colour on the stock list.
    pub fn color(self) -> &'static str {
        match self {
            StockStatus::Good => "green",
            StockStatus::Low => "amber",
            StockStatus::Out => "red",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            StockStatus::Good => "in stock",
            StockStatus::Low => "low stock",
            StockStatus::Out => "out of stock",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    /// Free-text category such as "Vegetables" or "Dairy".
    pub category: String,
    pub quantity: Decimal,
    pub unit: StockUnit,
    pub low_stock_threshold: Decimal,
    pub supplier: Option<String>,
    pub cost_per_unit: Option<Decimal>,
    /// Last time stock was added. Set on creation and on every positive adjustment.
    pub last_restocked: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn new(id: InventoryItemId, params: InventoryItemCreate, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: params.name.trim().to_string(),
            category: params.category.trim().to_string(),
            quantity: params.quantity,
            unit: params.unit,
            low_stock_threshold: params.low_stock_threshold,
            supplier: params.supplier.filter(|s| !s.trim().is_empty()),
            cost_per_unit: params.cost_per_unit,
            last_restocked: Some(created_at),
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::of(self.quantity, self.low_stock_threshold)
    }

    /// `quantity × cost_per_unit`; zero when the cost is unknown.
    pub fn stock_value(&self) -> Decimal {
        self.cost_per_unit
            .map_or(Decimal::ZERO, |cost| self.quantity.saturating_mul(cost))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItemCreate {
    pub name: String,
    pub category: String,
    pub quantity: Decimal,
    pub unit: StockUnit,
    pub low_stock_threshold: Decimal,
    pub supplier: Option<String>,
    pub cost_per_unit: Option<Decimal>,
}

impl InventoryItemCreate {
    pub fn new(
        name: impl Into<String>,
        quantity: Decimal,
        unit: StockUnit,
        low_stock_threshold: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category: "Ingredients".to_string(),
            quantity,
            unit,
            low_stock_threshold,
            supplier: None,
            cost_per_unit: None,
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }

    pub fn cost_per_unit(mut self, cost: Decimal) -> Self {
        self.cost_per_unit = Some(cost);
        self
    }
}

/// Field-level edit; `None` leaves the field as it is. Quantity changes go through
/// [`InventoryAction`](crate::inventory_actor::InventoryAction).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<StockUnit>,
    pub low_stock_threshold: Option<Decimal>,
    pub supplier: Option<String>,
    pub cost_per_unit: Option<Decimal>,
}

/// Tabs on the stock list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockFilter {
    #[default]
    All,
    /// Low stock only; empty items are listed under `Out`.
    Low,
    Out,
}

impl StockFilter {
    pub fn matches(self, item: &InventoryItem) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::Low => item.status() == StockStatus::Low,
            StockFilter::Out => item.status() == StockStatus::Out,
        }
    }
}

/// Header figures for the stock list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockSummary {
    pub items: usize,
    pub low: usize,
    pub out: usize,
    /// Sum of [`InventoryItem::stock_value`], saturating at the `Decimal` range.
    pub total_value: Decimal,
}

impl StockSummary {
    pub fn of<'a>(items: impl IntoIterator<Item = &'a InventoryItem>) -> Self {
        items
            .into_iter()
            .fold(StockSummary::default(), |mut summary, item| {
                summary.items += 1;
                match item.status() {
                    StockStatus::Low => summary.low += 1,
                    StockStatus::Out => summary.out += 1,
                    StockStatus::Good => {}
                }
                summary.total_value = summary.total_value.saturating_add(item.stock_value());
                summary
            })
    }
}
