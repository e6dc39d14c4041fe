use crate::core::{contributors, extractor};
use crate::domain::model::{DateRange, UserStats};
use crate::domain::ports::QueryRunner;
use crate::utils::error::{Result, StatsError};
use std::sync::Arc;
use tokio::task::JoinSet;

/// Collects per-identity statistics for one repository.
///
/// The working-tree probe is the only failure that propagates: an unusable
/// repository yields `StatsError::InvalidRepository`. Everything downstream
/// (missing contributors, per-identity query failures) is absorbed into an
/// emptier result.
pub async fn repo_stats<R>(
    runner: &Arc<R>,
    repo_path: &str,
    range: &DateRange,
    exclude_patterns: &[String],
) -> Result<Vec<UserStats>>
where
    R: QueryRunner + 'static,
{
    probe_work_tree(runner.as_ref(), repo_path).await?;

    let names = contributors::list_contributors(runner.as_ref(), repo_path, range).await;
    if names.is_empty() {
        return Ok(Vec::new());
    }

    // One extraction task per identity, all launched together and joined
    // before returning. Each task only reads its own parameters.
    let mut tasks = JoinSet::new();
    for user_name in names {
        let runner = Arc::clone(runner);
        let repo_path = repo_path.to_string();
        let range = range.clone();
        let exclude_patterns = exclude_patterns.to_vec();

        tasks.spawn(async move {
            extractor::user_stats(
                runner.as_ref(),
                &repo_path,
                &user_name,
                &range,
                &exclude_patterns,
            )
            .await
            .map(|stats| UserStats { user_name, stats })
        });
    }

    let mut results = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some(user_stats)) => results.push(user_stats),
            Ok(None) => {} // no qualifying activity for that identity
            Err(e) => tracing::warn!("Extraction task failed in {}: {}", repo_path, e),
        }
    }

    Ok(results)
}

async fn probe_work_tree<R: QueryRunner + ?Sized>(runner: &R, repo_path: &str) -> Result<()> {
    let args: Vec<String> = vec!["rev-parse".to_string(), "--is-inside-work-tree".to_string()];

    runner
        .run(repo_path, &args)
        .await
        .map(|_| ())
        .map_err(|e| StatsError::InvalidRepository {
            path: repo_path.to_string(),
            message: e.to_string(),
        })
}
