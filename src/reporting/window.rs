//! Reporting windows, resolved against the caller's local calendar.

use chrono::{DateTime, Days, Months, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportWindow {
    /// Local midnight today until now.
    #[default]
    Today,
    /// Local midnight seven days ago until now.
    Week,
    /// Local midnight on the same day last month until now.
    Month,
}

/// Inclusive time range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

impl ReportWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportWindow::Today => "today",
            ReportWindow::Week => "week",
            ReportWindow::Month => "month",
        }
    }

    /// Resolves the window ending at `now`, with day boundaries taken in `now`'s time zone.
    ///
    /// Month subtraction clamps to the last day of a shorter month (31 March → 28/29 Feb).
    pub fn range<Tz: TimeZone>(self, now: &DateTime<Tz>) -> TimeRange {
        let today = now.date_naive();
        let first_day = match self {
            ReportWindow::Today => Some(today),
            ReportWindow::Week => today.checked_sub_days(Days::new(7)),
            ReportWindow::Month => today.checked_sub_months(Months::new(1)),
        }
        .unwrap_or(today);

        let end = now.with_timezone(&Utc);
        let start = start_of_day(first_day, &now.timezone()).unwrap_or(end);
        TimeRange { start, end }
    }
}

/// First valid local instant of `date`.
///
/// Usually midnight; on a day whose midnight falls in a DST gap, the first hour that exists.
pub fn start_of_day<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Utc>> {
    (0..24).find_map(|hour| {
        let local = date.and_hms_opt(hour, 0, 0)?;
        tz.from_local_datetime(&local)
            .earliest()
            .map(|instant| instant.with_timezone(&Utc))
    })
}

impl Display for ReportWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(ReportWindow::Today),
            "week" | "this-week" => Ok(ReportWindow::Week),
            "month" | "this-month" => Ok(ReportWindow::Month),
            other => Err(format!("unknown report window '{}'", other)),
        }
    }
}
