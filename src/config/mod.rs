pub mod file;

use crate::domain::model::DateRange;
use crate::utils::error::{Result, StatsError};
use chrono::{Days, Local, Months, NaiveDate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Parser)]
#[command(name = "git-stats")]
#[command(about = "Aggregate git statistics across multiple repositories")]
#[command(version)]
pub struct CliConfig {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "./config/repos.toml")]
    pub config: String,

    /// Output format (overrides the config default)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Time period (overrides the config default)
    #[arg(short, long, value_enum)]
    pub period: Option<TimePeriod>,

    /// Custom start date (YYYY-MM-DD), requires --period=custom
    #[arg(short, long)]
    pub since: Option<String>,

    /// Custom end date (YYYY-MM-DD), requires --period=custom
    #[arg(short, long)]
    pub until: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Pretty,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimePeriod {
    LastDay,
    LastWeek,
    LastMonth,
    LastQuarter,
    LastYear,
    Custom,
}

impl TimePeriod {
    /// Computes the query window. Named periods count back from today;
    /// `custom` passes the two supplied dates through verbatim.
    pub fn date_range(self, since: Option<String>, until: Option<String>) -> Result<DateRange> {
        if self == TimePeriod::Custom {
            return match (since, until) {
                (Some(s), Some(u)) => Ok(DateRange::new(s, u)),
                _ => Err(StatsError::ConfigValidationError {
                    field: "period".to_string(),
                    message: "--since and --until are required when period is custom".to_string(),
                }),
            };
        }

        let today = Local::now().date_naive();
        Ok(self.window_ending(today))
    }

    fn window_ending(self, today: NaiveDate) -> DateRange {
        let since = match self {
            TimePeriod::LastDay => today.checked_sub_days(Days::new(1)),
            TimePeriod::LastWeek => today.checked_sub_days(Days::new(7)),
            TimePeriod::LastMonth => today.checked_sub_months(Months::new(1)),
            TimePeriod::LastQuarter => today.checked_sub_months(Months::new(3)),
            TimePeriod::LastYear => today.checked_sub_months(Months::new(12)),
            TimePeriod::Custom => unreachable!("custom period carries explicit dates"),
        }
        .unwrap_or(today);

        DateRange::new(
            since.format("%Y-%m-%d").to_string(),
            today.format("%Y-%m-%d").to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_week_counts_back_seven_days() {
        let range = TimePeriod::LastWeek.window_ending(day(2024, 3, 15));
        assert_eq!(range.since, "2024-03-08");
        assert_eq!(range.until, "2024-03-15");
    }

    #[test]
    fn last_month_clamps_to_month_end() {
        let range = TimePeriod::LastMonth.window_ending(day(2024, 3, 31));
        assert_eq!(range.since, "2024-02-29");
    }

    #[test]
    fn last_quarter_and_year_use_month_arithmetic() {
        assert_eq!(
            TimePeriod::LastQuarter.window_ending(day(2024, 6, 10)).since,
            "2024-03-10"
        );
        assert_eq!(
            TimePeriod::LastYear.window_ending(day(2024, 6, 10)).since,
            "2023-06-10"
        );
    }

    #[test]
    fn custom_period_passes_dates_through() {
        let range = TimePeriod::Custom
            .date_range(Some("2023-01-01".to_string()), Some("2023-02-01".to_string()))
            .unwrap();
        assert_eq!(range, DateRange::new("2023-01-01", "2023-02-01"));
    }

    #[test]
    fn custom_period_requires_both_dates() {
        assert!(TimePeriod::Custom
            .date_range(Some("2023-01-01".to_string()), None)
            .is_err());
        assert!(TimePeriod::Custom.date_range(None, None).is_err());
    }
}
