use super::metrics::{
    best_sellers, category_revenue, daily_revenue, peak_hour, summarize, within, BestSeller,
    CategoryRevenue, DailyRevenue, PeakHour, Summary,
};
use super::window::{ReportWindow, TimeRange};
use crate::model::{MenuItem, Order};
use crate::settings::ReportingSettings;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

/// Everything the analytics screen shows for one window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub window: ReportWindow,
    pub range: TimeRange,
    pub summary: Summary,
    pub best_sellers: Vec<BestSeller>,
    pub peak_hour: Option<PeakHour>,
    /// Trailing days ending today, independent of `window`.
    pub daily_revenue: Vec<DailyRevenue>,
    pub top_categories: Vec<CategoryRevenue>,
}

impl SalesReport {
    /// Folds the full order history into a report for `window` ending at `now`.
    ///
    /// Day and hour boundaries are taken in `now`'s time zone.
    pub fn build<Tz: TimeZone>(
        window: ReportWindow,
        orders: &[Order],
        menu: &[MenuItem],
        now: &DateTime<Tz>,
        settings: &ReportingSettings,
    ) -> Self {
        let range = window.range(now);
        let in_window = within(orders, &range);

        Self {
            window,
            range,
            summary: summarize(in_window.iter().copied()),
            best_sellers: best_sellers(
                in_window.iter().copied(),
                menu,
                settings.best_seller_limit,
            ),
            peak_hour: peak_hour(in_window.iter().copied(), &now.timezone()),
            daily_revenue: daily_revenue(orders, now, settings.daily_revenue_days),
            top_categories: category_revenue(
                in_window.iter().copied(),
                menu,
                settings.top_category_limit,
            ),
        }
    }
}

impl Display for SalesReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sales report ({})", self.window)?;
        writeln!(f, "  Revenue:      Rs. {:.2}", self.summary.revenue)?;
        writeln!(
            f,
            "  Orders:       {} ({} completed)",
            self.summary.order_count, self.summary.completed_count
        )?;
        writeln!(
            f,
            "  Avg. order:   Rs. {:.2}",
            self.summary.average_order_value.round_dp(2)
        )?;
        if let Some(peak) = &self.peak_hour {
            writeln!(f, "  Peak hour:    {} ({} orders)", peak.label(), peak.orders)?;
        }
        if !self.best_sellers.is_empty() {
            writeln!(f, "  Best sellers:")?;
            for (rank, item) in self.best_sellers.iter().enumerate() {
                writeln!(f, "    {}. {} x{}", rank + 1, item.name, item.count)?;
            }
        }
        if !self.top_categories.is_empty() {
            writeln!(f, "  Categories:")?;
            for category in &self.top_categories {
                writeln!(f, "    {:<12} Rs. {:.2}", category.category, category.revenue)?;
            }
        }
        writeln!(f, "  Daily revenue:")?;
        for day in &self.daily_revenue {
            writeln!(f, "    {} {}  Rs. {:.2}", day.label(), day.date, day.revenue)?;
        }
        Ok(())
    }
}
