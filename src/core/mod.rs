pub mod aggregator;
pub mod collector;
pub mod contributors;
pub mod extractor;

pub use crate::domain::model::{
    DateRange, ExecutionContext, GitStats, RepoOutcome, Repository, RunReport, UserMapping,
    UserStats,
};
pub use crate::domain::ports::QueryRunner;
pub use crate::utils::error::Result;
