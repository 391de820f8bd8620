//! Folds over order history. All functions are pure and total: empty input yields zeros or
//! `None`, never a panic. Sums saturate at the `Decimal` range.

use super::window::{start_of_day, TimeRange};
use crate::model::{MenuItem, MenuItemId, Order, OrderStatus};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Category used for revenue that cannot be attributed to a menu category.
pub const OTHER_CATEGORY: &str = "Other";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub revenue: Decimal,
    pub order_count: usize,
    pub completed_count: usize,
    /// `revenue / order_count`, unrounded; zero when there are no orders.
    pub average_order_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestSeller {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakHour {
    /// Local hour of day, 0-23.
    pub hour: u32,
    pub orders: usize,
}

impl PeakHour {
    /// `"12 AM"`, `"9 AM"`, `"12 PM"`, `"7 PM"`.
    pub fn label(&self) -> String {
        match self.hour {
            0 => "12 AM".to_string(),
            h @ 1..=11 => format!("{} AM", h),
            12 => "12 PM".to_string(),
            h => format!("{} PM", h - 12),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Decimal,
}

impl DailyRevenue {
    /// Short weekday name for chart axes, e.g. `"Mon"`.
    pub fn label(&self) -> String {
        self.date.format("%a").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: Decimal,
}

/// Orders whose creation time lies in `range`, inclusive at both ends.
pub fn within<'a>(orders: impl IntoIterator<Item = &'a Order>, range: &TimeRange) -> Vec<&'a Order> {
    orders
        .into_iter()
        .filter(|order| range.contains(order.created_at))
        .collect()
}

pub fn summarize<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Summary {
    let mut summary = orders
        .into_iter()
        .fold(Summary::default(), |mut summary, order| {
            summary.revenue = summary.revenue.saturating_add(order.total);
            summary.order_count += 1;
            if order.status == OrderStatus::Delivered {
                summary.completed_count += 1;
            }
            summary
        });
    if summary.order_count > 0 {
        summary.average_order_value = summary.revenue / Decimal::from(summary.order_count);
    }
    summary
}

/// Most-ordered menu items, highest count first, ties by name.
///
/// Orders with line items count each line's quantity against its menu item. Orders without
/// line items fall back to matching menu names inside the free-text description
/// (case-insensitive, one count per matching name per order).
pub fn best_sellers<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    menu: &[MenuItem],
    limit: usize,
) -> Vec<BestSeller> {
    let names: HashMap<MenuItemId, &str> = menu
        .iter()
        .map(|item| (item.id, item.name.as_str()))
        .collect();
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for order in orders {
        if order.lines.is_empty() {
            let text = order.items.to_lowercase();
            for item in menu.iter().filter(|item| !item.name.trim().is_empty()) {
                if text.contains(&item.name.to_lowercase()) {
                    *counts.entry(item.name.clone()).or_default() += 1;
                }
            }
        } else {
            for line in &order.lines {
                let name = names
                    .get(&line.menu_item_id)
                    .copied()
                    .unwrap_or(line.name.as_str());
                *counts.entry(name.to_string()).or_default() += line.quantity;
            }
        }
    }

    let mut ranked: Vec<BestSeller> = counts
        .into_iter()
        .map(|(name, count)| BestSeller { name, count })
        .collect();
    // BTreeMap iteration is by name, and the sort is stable.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// The local hour with the most orders. Ties go to the earliest hour.
pub fn peak_hour<'a, Tz: TimeZone>(
    orders: impl IntoIterator<Item = &'a Order>,
    tz: &Tz,
) -> Option<PeakHour> {
    let mut buckets = [0usize; 24];
    for order in orders {
        let hour = order.created_at.with_timezone(tz).hour() as usize;
        buckets[hour] += 1;
    }
    buckets
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .fold(None, |best: Option<PeakHour>, (hour, &count)| match best {
            Some(best) if best.orders >= count => Some(best),
            _ => Some(PeakHour {
                hour: hour as u32,
                orders: count,
            }),
        })
}

/// Revenue per local calendar day for the `days` days ending today, oldest first.
///
/// Days without orders appear with zero revenue.
pub fn daily_revenue<'a, Tz: TimeZone>(
    orders: impl IntoIterator<Item = &'a Order>,
    now: &DateTime<Tz>,
    days: usize,
) -> Vec<DailyRevenue> {
    let tz = now.timezone();
    let today = now.date_naive();
    let mut series: Vec<DailyRevenue> = (0..days as u64)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| DailyRevenue {
            date,
            revenue: Decimal::ZERO,
        })
        .collect();

    let Some(first) = series.first().map(|day| day.date) else {
        return series;
    };
    let Some(from) = start_of_day(first, &tz) else {
        return series;
    };

    for order in orders {
        if order.created_at < from {
            continue;
        }
        let date = order.created_at.with_timezone(&tz).date_naive();
        if let Some(day) = series.iter_mut().find(|day| day.date == date) {
            day.revenue = day.revenue.saturating_add(order.total);
        }
    }
    series
}

/// Revenue per menu category, highest first, ties by name.
///
/// Line items are attributed to their menu item's category. Uncategorised or unknown
/// items, and orders without line items, count under [`OTHER_CATEGORY`].
pub fn category_revenue<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    menu: &[MenuItem],
    limit: usize,
) -> Vec<CategoryRevenue> {
    let categories: HashMap<MenuItemId, &str> = menu
        .iter()
        .filter(|item| !item.category.trim().is_empty())
        .map(|item| (item.id, item.category.as_str()))
        .collect();
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();

    for order in orders {
        if order.lines.is_empty() {
            add_to(&mut totals, OTHER_CATEGORY, order.total);
            continue;
        }
        for line in &order.lines {
            let category = categories
                .get(&line.menu_item_id)
                .copied()
                .unwrap_or(OTHER_CATEGORY);
            add_to(&mut totals, category, line.line_total());
        }
    }

    let mut ranked: Vec<CategoryRevenue> = totals
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue { category, revenue })
        .collect();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranked.truncate(limit);
    ranked
}

fn add_to(totals: &mut BTreeMap<String, Decimal>, category: &str, amount: Decimal) {
    let total = totals.entry(category.to_string()).or_default();
    *total = total.saturating_add(amount);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemCreate, OrderCreate, OrderId, OrderLine};
    use chrono::{FixedOffset, Utc};

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, minute, 0).unwrap()
    }

    fn order(id: u32, items: &str, total: i64, created_at: DateTime<Utc>) -> Order {
        Order::new(
            OrderId(id),
            OrderCreate::new(items, Decimal::from(total)),
            created_at,
        )
    }

    fn menu_item(id: u32, name: &str, category: &str) -> MenuItem {
        MenuItem::new(
            MenuItemId(id),
            MenuItemCreate::new(name, Decimal::from(500), category),
        )
    }

    #[test]
    fn empty_history_summarizes_to_zero() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.average_order_value, Decimal::ZERO);
        assert!(peak_hour(std::iter::empty(), &Utc).is_none());
        assert!(best_sellers(std::iter::empty(), &[], 5).is_empty());
    }

    #[test]
    fn summary_counts_completed_orders() {
        let mut delivered = order(1, "Tea", 100, at(1, 9, 0));
        delivered.status = OrderStatus::Delivered;
        let pending = order(2, "Tea", 50, at(1, 9, 5));
        let summary = summarize([&delivered, &pending]);
        assert_eq!(summary.revenue, Decimal::from(150));
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.average_order_value, Decimal::from(75));
    }

    #[test]
    fn average_is_not_rounded() {
        let orders = [
            order(1, "Tea", 100, at(1, 9, 0)),
            order(2, "Tea", 100, at(1, 9, 0)),
            order(3, "Tea", 0, at(1, 9, 0)),
        ];
        let average = summarize(orders.iter()).average_order_value;
        assert_eq!(average, Decimal::from(200) / Decimal::from(3));
        assert_ne!(average, Decimal::new(6667, 2));
        assert_eq!(average.round_dp(2), Decimal::new(6667, 2));
    }

    #[test]
    fn huge_totals_saturate_instead_of_panicking() {
        let orders = [
            order(1, "Tea", 100, at(1, 9, 0)),
            Order::new(
                OrderId(2),
                OrderCreate::new("Everything", Decimal::MAX),
                at(1, 10, 0),
            ),
        ];
        let summary = summarize(orders.iter());
        assert_eq!(summary.revenue, Decimal::MAX);
        assert_eq!(summary.order_count, 2);

        let categories = category_revenue(orders.iter(), &[], 5);
        assert_eq!(categories[0].revenue, Decimal::MAX);

        let now = at(1, 12, 0);
        let series = daily_revenue(orders.iter(), &now, 1);
        assert_eq!(series[0].revenue, Decimal::MAX);
    }

    #[test]
    fn within_is_inclusive() {
        let range = TimeRange {
            start: at(1, 0, 0),
            end: at(1, 12, 0),
        };
        let orders = [
            order(1, "a", 1, at(1, 0, 0)),
            order(2, "b", 1, at(1, 12, 0)),
            order(3, "c", 1, at(1, 12, 1)),
        ];
        assert_eq!(within(orders.iter(), &range).len(), 2);
    }

    #[test]
    fn substring_fallback_counts_overlapping_names() {
        let menu = [
            menu_item(1, "Rice", "Mains"),
            menu_item(2, "Fried Rice", "Mains"),
        ];
        let orders = [
            order(1, "2x Fried Rice", 100, at(1, 9, 0)),
            order(2, "Egg rice", 100, at(1, 9, 0)),
        ];
        let ranked = best_sellers(orders.iter(), &menu, 5);
        assert_eq!(
            ranked,
            vec![
                BestSeller {
                    name: "Rice".into(),
                    count: 2
                },
                BestSeller {
                    name: "Fried Rice".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn line_items_count_quantities() {
        let menu = [
            menu_item(1, "Rice", "Mains"),
            menu_item(2, "Fried Rice", "Mains"),
        ];
        let mut structured = order(1, "3x Fried Rice", 300, at(1, 9, 0));
        structured.lines = vec![OrderLine {
            menu_item_id: MenuItemId(2),
            name: "Fried Rice".into(),
            quantity: 3,
            unit_price: Decimal::from(100),
        }];
        let ranked = best_sellers([&structured], &menu, 5);
        assert_eq!(
            ranked,
            vec![BestSeller {
                name: "Fried Rice".into(),
                count: 3
            }]
        );
    }

    #[test]
    fn best_sellers_respects_limit_and_name_ties() {
        let menu = [
            menu_item(1, "Tea", "Drinks"),
            menu_item(2, "Coffee", "Drinks"),
            menu_item(3, "Juice", "Drinks"),
        ];
        let orders = [order(1, "tea, coffee, juice", 10, at(1, 9, 0))];
        let ranked = best_sellers(orders.iter(), &menu, 2);
        let names: Vec<&str> = ranked.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Coffee", "Juice"]);
    }

    #[test]
    fn peak_hour_uses_local_time_and_earliest_tie() {
        let orders = [
            order(1, "a", 1, at(1, 3, 0)),
            order(2, "b", 1, at(1, 3, 40)),
            order(3, "c", 1, at(1, 7, 0)),
            order(4, "d", 1, at(1, 7, 10)),
        ];
        let peak = peak_hour(orders.iter(), &Utc).unwrap();
        assert_eq!(peak, PeakHour { hour: 3, orders: 2 });

        let colombo = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let local = peak_hour(orders.iter(), &colombo).unwrap();
        // 07:00 and 07:10 UTC are both 12:xx in Colombo; 03:00 and 03:40 split across 8 and 9.
        assert_eq!(local, PeakHour { hour: 12, orders: 2 });
        assert_eq!(PeakHour { hour: 0, orders: 1 }.label(), "12 AM");
        assert_eq!(PeakHour { hour: 12, orders: 1 }.label(), "12 PM");
        assert_eq!(PeakHour { hour: 19, orders: 1 }.label(), "7 PM");
    }

    #[test]
    fn daily_revenue_zero_fills_and_ignores_older_orders() {
        let now = at(10, 18, 0);
        let orders = [
            order(1, "a", 100, at(10, 9, 0)),
            order(2, "b", 50, at(10, 11, 0)),
            order(3, "c", 70, at(8, 20, 0)),
            order(4, "d", 999, at(1, 12, 0)),
        ];
        let series = daily_revenue(orders.iter(), &now, 7);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 5, 4).unwrap());
        assert_eq!(series[6].revenue, Decimal::from(150));
        assert_eq!(series[4].revenue, Decimal::from(70));
        let total: Decimal = series.iter().map(|d| d.revenue).sum();
        assert_eq!(total, Decimal::from(220));
        assert_eq!(series[6].label(), "Fri");
    }

    #[test]
    fn category_revenue_attributes_lines_and_falls_back_to_other() {
        let menu = [
            menu_item(1, "Kottu", "Mains"),
            menu_item(2, "Cola", "Beverages"),
            menu_item(3, "Special", ""),
        ];
        let mut structured = order(1, "", 0, at(1, 9, 0));
        structured.lines = vec![
            OrderLine {
                menu_item_id: MenuItemId(1),
                name: "Kottu".into(),
                quantity: 2,
                unit_price: Decimal::from(800),
            },
            OrderLine {
                menu_item_id: MenuItemId(2),
                name: "Cola".into(),
                quantity: 1,
                unit_price: Decimal::from(200),
            },
            OrderLine {
                menu_item_id: MenuItemId(3),
                name: "Special".into(),
                quantity: 1,
                unit_price: Decimal::from(300),
            },
        ];
        let free_text = order(2, "Tea", 150, at(1, 9, 0));

        let ranked = category_revenue([&structured, &free_text], &menu, 4);
        assert_eq!(
            ranked,
            vec![
                CategoryRevenue {
                    category: "Mains".into(),
                    revenue: Decimal::from(1600)
                },
                CategoryRevenue {
                    category: "Other".into(),
                    revenue: Decimal::from(450)
                },
                CategoryRevenue {
                    category: "Beverages".into(),
                    revenue: Decimal::from(200)
                },
            ]
        );
        assert_eq!(category_revenue([&free_text], &menu, 0), vec![]);
    }
}
