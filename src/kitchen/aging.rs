//! Time-based urgency for kitchen tickets.
//!
//! Aging only recolours a ticket; it never reorders the queue and is never stored on the
//! order. Everything here is a pure function of its inputs.

use crate::model::Order;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How late an order is relative to its expected preparation time `T`.
///
/// | elapsed | band |
/// |---|---|
/// | `≤ T` | `OnTime` |
/// | `T < e ≤ T + grace` | `AtRisk` |
/// | `> T + grace` | `Overdue` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingBand {
    OnTime,
    AtRisk,
    Overdue,
}

impl AgingBand {
    /// Indicator colour for the ticket timer.
    pub fn colour(self) -> &'static str {
        match self {
            AgingBand::OnTime => "green",
            AgingBand::AtRisk => "amber",
            AgingBand::Overdue => "red",
        }
    }
}

impl Display for AgingBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AgingBand::OnTime => "on time",
            AgingBand::AtRisk => "at risk",
            AgingBand::Overdue => "overdue",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingPolicy {
    /// `T` for orders that carry no preparation time.
    pub default_prep_minutes: u32,
    /// Minutes past `T` before an order counts as overdue.
    pub grace_minutes: u32,
}

impl Default for AgingPolicy {
    fn default() -> Self {
        Self {
            default_prep_minutes: 15,
            grace_minutes: 10,
        }
    }
}

impl AgingPolicy {
    pub fn band(&self, elapsed_minutes: u64, prep_minutes: Option<u32>) -> AgingBand {
        let expected = u64::from(prep_minutes.unwrap_or(self.default_prep_minutes));
        if elapsed_minutes > expected + u64::from(self.grace_minutes) {
            AgingBand::Overdue
        } else if elapsed_minutes > expected {
            AgingBand::AtRisk
        } else {
            AgingBand::OnTime
        }
    }

    pub fn band_for(&self, order: &Order, now: DateTime<Utc>) -> AgingBand {
        self.band(elapsed_minutes(order.created_at, now), order.prep_minutes)
    }
}

/// Whole minutes since `created_at`, rounded down. Clock skew never yields a negative age.
pub fn elapsed_minutes(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - created_at).num_minutes()).unwrap_or(0)
}

/// `"12m"` under an hour, `"1h 5m"` from there on.
pub fn elapsed_label(minutes: u64) -> String {
    if minutes < 60 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}
