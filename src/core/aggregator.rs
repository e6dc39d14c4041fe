use crate::core::collector;
use crate::domain::model::{ExecutionContext, GitStats, RepoOutcome, RunReport, UserMapping, UserStats};
use crate::domain::ports::QueryRunner;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves a raw identity to its canonical name. Mappings are scanned in
/// configured order; the first whose primary name equals the identity or
/// whose alternates contain it wins. Unmapped names pass through unchanged.
pub fn normalize_user_name(user_name: &str, mappings: &[UserMapping]) -> String {
    for mapping in mappings {
        if user_name == mapping.primary_name
            || mapping
                .alternate_identities
                .iter()
                .any(|alt| alt == user_name)
        {
            return mapping.primary_name.clone();
        }
    }
    user_name.to_string()
}

/// Aggregates statistics across all active repositories.
///
/// Repositories are processed strictly sequentially: each repository's
/// concurrent per-identity phase fully joins before the next one starts, so
/// the merge below is single-writer and the number of simultaneously running
/// git processes stays bounded by one repository's contributor count. A
/// repository whose probe fails is skipped with its reason recorded; merged
/// data from earlier repositories is retained.
pub async fn aggregate_stats<R>(runner: &Arc<R>, ctx: &ExecutionContext) -> RunReport
where
    R: QueryRunner + 'static,
{
    let mut aggregated: HashMap<String, GitStats> = HashMap::new();
    let mut outcomes = Vec::new();

    for repo in ctx.repositories.iter().filter(|r| r.active) {
        tracing::info!("Processing repository: {}", repo.name);

        match collector::repo_stats(runner, &repo.path, &ctx.date_range, &ctx.exclude_patterns)
            .await
        {
            Ok(records) => {
                outcomes.push(RepoOutcome::Collected {
                    repository: repo.name.clone(),
                    contributors: records.len(),
                });

                for record in records {
                    let name = normalize_user_name(&record.user_name, &ctx.user_mappings);
                    aggregated.entry(name).or_default().merge(&record.stats);
                }
            }
            Err(e) => {
                tracing::error!("Error processing {}: {}", repo.name, e);
                outcomes.push(RepoOutcome::Skipped {
                    repository: repo.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    let mut stats: Vec<UserStats> = aggregated
        .into_iter()
        .map(|(user_name, stats)| UserStats { user_name, stats })
        .collect();
    rank(&mut stats);

    RunReport { stats, outcomes }
}

/// Descending commit count; ties break on ascending name so the report is
/// deterministic across runs.
fn rank(stats: &mut [UserStats]) {
    stats.sort_by(|a, b| {
        b.stats
            .commit_count
            .cmp(&a.stats.commit_count)
            .then_with(|| a.user_name.cmp(&b.user_name))
    });
}
