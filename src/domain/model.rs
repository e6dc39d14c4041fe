use serde::{Deserialize, Serialize};

/// Date window handed to every git query, verbatim `YYYY-MM-DD` strings.
/// `since` is the inclusive lower bound, `until` the upper bound
/// (git `--since` / `--before` semantics, no normalization here).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub since: String,
    pub until: String,
}

impl DateRange {
    pub fn new(since: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            since: since.into(),
            until: until.into(),
        }
    }
}

/// Unknown keys are rejected: TOML folds a misplaced top-level key into the
/// preceding `[[repositories]]` entry, and silently dropping it would lose
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Repository {
    pub name: String,
    pub path: String,
    pub active: bool,
}

/// One canonical contributor plus the aliases git history knows them by.
/// Unknown keys are rejected for the same reason as [`Repository`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserMapping {
    pub primary_name: String,
    #[serde(default)]
    pub alternate_identities: Vec<String>,
}

/// Change counters for one identity in one repository, or the merged
/// cross-repository totals after aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GitStats {
    pub files_changed: u64,
    pub lines_added: u64,
    pub lines_deleted: u64,
    pub total_delta: i64,
    pub ratio: f64,
    pub commit_count: u64,
}

impl GitStats {
    /// Builds a record from raw counters, deriving `total_delta` and `ratio`.
    pub fn from_counts(
        files_changed: u64,
        lines_added: u64,
        lines_deleted: u64,
        commit_count: u64,
    ) -> Self {
        let mut stats = Self {
            files_changed,
            lines_added,
            lines_deleted,
            total_delta: lines_added as i64 - lines_deleted as i64,
            ratio: 0.0,
            commit_count,
        };
        stats.recompute_ratio();
        stats
    }

    /// Adds another record field-wise and recomputes `ratio` from the
    /// post-merge cumulative line counts, so the final value is always
    /// `sum(deleted) / sum(added)` regardless of merge order.
    pub fn merge(&mut self, other: &GitStats) {
        self.files_changed += other.files_changed;
        self.lines_added += other.lines_added;
        self.lines_deleted += other.lines_deleted;
        self.total_delta += other.total_delta;
        self.commit_count += other.commit_count;
        self.recompute_ratio();
    }

    fn recompute_ratio(&mut self) {
        self.ratio = if self.lines_added > 0 {
            self.lines_deleted as f64 / self.lines_added as f64
        } else {
            0.0
        };
    }
}

/// Final output record: one contributor's merged stats under their
/// normalized name. Serializes flat for the JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub user_name: String,
    #[serde(flatten)]
    pub stats: GitStats,
}

/// Everything one aggregation run needs.
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub repositories: Vec<Repository>,
    pub user_mappings: Vec<UserMapping>,
    pub exclude_patterns: Vec<String>,
    pub date_range: DateRange,
}

/// Explicit per-repository result, so failure visibility does not depend
/// on log output alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoOutcome {
    Collected {
        repository: String,
        contributors: usize,
    },
    Skipped {
        repository: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub stats: Vec<UserStats>,
    pub outcomes: Vec<RepoOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counts_derives_delta_and_ratio() {
        let stats = GitStats::from_counts(3, 100, 25, 7);
        assert_eq!(stats.total_delta, 75);
        assert_eq!(stats.ratio, 0.25);
        assert_eq!(stats.commit_count, 7);
    }

    #[test]
    fn from_counts_with_no_additions_has_zero_ratio() {
        let stats = GitStats::from_counts(1, 0, 40, 2);
        assert_eq!(stats.total_delta, -40);
        assert_eq!(stats.ratio, 0.0);
    }

    #[test]
    fn merge_recomputes_ratio_from_cumulative_totals() {
        let mut total = GitStats::from_counts(2, 100, 20, 5);
        total.merge(&GitStats::from_counts(1, 50, 10, 3));

        assert_eq!(total.files_changed, 3);
        assert_eq!(total.lines_added, 150);
        assert_eq!(total.lines_deleted, 30);
        assert_eq!(total.total_delta, 120);
        assert_eq!(total.commit_count, 8);
        assert_eq!(total.ratio, 0.2);
    }

    #[test]
    fn merge_is_order_independent() {
        let a = GitStats::from_counts(2, 100, 20, 5);
        let b = GitStats::from_counts(1, 50, 10, 3);

        let mut ab = GitStats::default();
        ab.merge(&a);
        ab.merge(&b);

        let mut ba = GitStats::default();
        ba.merge(&b);
        ba.merge(&a);

        assert_eq!(ab, ba);
    }
}
