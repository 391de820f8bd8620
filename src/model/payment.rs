use crate::model::OrderId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Type-safe identifier for Payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub u32);

impl From<u32> for PaymentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "payment_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
    Split,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Split => "split",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One share of a split payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitPart {
    pub method: PaymentMethod,
    pub amount: Decimal,
}

/// Settlement of one order. Never changes once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    pub customer_name: String,
    pub items: String,
    pub subtotal: Decimal,
    pub tip: Decimal,
    pub discount: Decimal,
    pub final_amount: Decimal,
    pub method: PaymentMethod,
    #[serde(default)]
    pub splits: Vec<SplitPart>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Plain-text receipt for printing or sharing.
    pub fn receipt(&self, restaurant_name: &str) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{:^26}", restaurant_name.to_uppercase());
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Customer: {}", self.customer_name);
        let _ = writeln!(out, "Date: {}", self.created_at.format("%Y-%m-%d %H:%M"));
        let _ = writeln!(out);
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Items: {}", self.items);
        let _ = writeln!(out);
        let _ = writeln!(out, "Subtotal:     Rs. {:.2}", self.subtotal);
        let _ = writeln!(out, "Tip:          Rs. {:.2}", self.tip);
        let _ = writeln!(out, "Discount:     Rs. {:.2}", self.discount);
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "TOTAL:        Rs. {:.2}", self.final_amount);
        let _ = writeln!(out);
        let _ = writeln!(out, "Payment: {}", self.method.as_str().to_uppercase());
        if !self.splits.is_empty() {
            let _ = writeln!(out, "Split:");
            for part in &self.splits {
                let _ = writeln!(out, "  {}: Rs. {:.2}", part.method, part.amount);
            }
        }
        if let Some(notes) = &self.notes {
            let _ = writeln!(out, "Notes: {}", notes);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "   Thank you for dining!");
        let _ = writeln!(out, "{RULE}");
        out
    }
}

/// Payment request. `final_amount` is derived, never supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCreate {
    pub order_id: OrderId,
    pub customer_name: String,
    pub items: String,
    pub subtotal: Decimal,
    pub tip: Decimal,
    pub discount: Decimal,
    pub method: PaymentMethod,
    pub splits: Vec<SplitPart>,
    pub notes: Option<String>,
}

impl PaymentCreate {
    /// `subtotal + tip - discount`, or `None` when the sum leaves the `Decimal` range.
    pub fn final_amount(&self) -> Option<Decimal> {
        self.subtotal
            .checked_add(self.tip)?
            .checked_sub(self.discount)
    }
}

/// Payments have no editable fields.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentUpdate {}
