pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod report;
pub mod utils;

pub use adapters::git::GitCli;
pub use config::{file::AppConfig, CliConfig, OutputFormat, TimePeriod};
pub use core::aggregator::aggregate_stats;
pub use domain::model::{
    DateRange, ExecutionContext, GitStats, RepoOutcome, Repository, RunReport, UserMapping,
    UserStats,
};
pub use domain::ports::QueryRunner;
pub use utils::error::{Result, StatsError};
