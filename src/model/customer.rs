use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// Loyalty tier, derived from lifetime spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl CustomerTier {
    pub fn for_spend(total_spent: Decimal) -> Self {
        if total_spent >= Decimal::from(50_000) {
            CustomerTier::Platinum
        } else if total_spent >= Decimal::from(25_000) {
            CustomerTier::Gold
        } else if total_spent >= Decimal::from(10_000) {
            CustomerTier::Silver
        } else {
            CustomerTier::Bronze
        }
    }

    pub fn is_vip(self) -> bool {
        matches!(self, CustomerTier::Gold | CustomerTier::Platinum)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub loyalty_points: u32,
    pub total_orders: u32,
    pub total_spent: Decimal,
    pub tier: CustomerTier,
    pub joined_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(id: CustomerId, params: CustomerCreate, joined_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: params.name.trim().to_string(),
            phone: params.phone.trim().to_string(),
            email: params.email.filter(|e| !e.trim().is_empty()),
            loyalty_points: 0,
            total_orders: 0,
            total_spent: Decimal::ZERO,
            tier: CustomerTier::Bronze,
            joined_at,
        }
    }

    /// Case-insensitive name match, or a phone substring match.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.phone.contains(query)
    }

    pub(crate) fn refresh_tier(&mut self) {
        self.tier = CustomerTier::for_spend(self.total_spent);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
}

/// Contact details edit; loyalty figures change only through actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
