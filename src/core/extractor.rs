use crate::domain::model::{DateRange, GitStats};
use crate::domain::ports::QueryRunner;
use regex::Regex;

/// Extracts one identity's change statistics from a repository.
///
/// Returns `None` when the identity had no qualifying activity in the window
/// (no shortstat summary lines) or when a query fails; neither case is fatal
/// to the surrounding run.
pub async fn user_stats<R: QueryRunner + ?Sized>(
    runner: &R,
    repo_path: &str,
    user_name: &str,
    range: &DateRange,
    exclude_patterns: &[String],
) -> Option<GitStats> {
    let output = match runner
        .run(repo_path, &log_args(user_name, range, exclude_patterns))
        .await
    {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!("Error getting stats for {}: {}", user_name, e);
            return None;
        }
    };

    let (files_changed, lines_added, lines_deleted) = parse_shortstat(&output)?;

    // Commit count comes from its own query, not from the number of summary
    // lines parsed above. The count query carries no pathspec filter, so a
    // commit touching only excluded paths still counts toward commit_count
    // while contributing nothing to the line counters.
    let commit_count = match runner
        .run(repo_path, &commit_count_args(user_name, range))
        .await
    {
        Ok(output) => parse_commit_count(&output),
        Err(e) => {
            tracing::warn!("Error getting commit count for {}: {}", user_name, e);
            return None;
        }
    };

    Some(GitStats::from_counts(
        files_changed,
        lines_added,
        lines_deleted,
        commit_count,
    ))
}

/// Per-author detailed log with one shortstat summary line per commit.
/// Exclude patterns apply here only, as pathspec filters.
pub(crate) fn log_args(
    user_name: &str,
    range: &DateRange,
    exclude_patterns: &[String],
) -> Vec<String> {
    let mut args = vec![
        "log".to_string(),
        format!("--author={}", user_name),
        "--no-merges".to_string(),
        "--shortstat".to_string(),
        format!("--since={}", range.since),
        format!("--before={}", range.until),
    ];

    if !exclude_patterns.is_empty() {
        args.push("--".to_string());
        args.push(".".to_string());
        for pattern in exclude_patterns {
            args.push(format!(":(exclude){}", pattern));
        }
    }

    args
}

pub(crate) fn commit_count_args(user_name: &str, range: &DateRange) -> Vec<String> {
    vec![
        "shortlog".to_string(),
        "-sn".to_string(),
        "--no-merges".to_string(),
        format!("--since={}", range.since),
        format!("--before={}", range.until),
        format!("--author={}", user_name),
        "HEAD".to_string(),
    ]
}

/// Accumulates every shortstat summary line, e.g.
/// `" 2 files changed, 20 insertions(+), 10 deletions(-)"`. Any of the three
/// counters may be absent on a given line. Returns `None` when no summary
/// line is present at all.
pub(crate) fn parse_shortstat(output: &str) -> Option<(u64, u64, u64)> {
    let files_re = Regex::new(r"(\d+) files? changed").unwrap();
    let insert_re = Regex::new(r"(\d+) insertions?\(\+\)").unwrap();
    let delete_re = Regex::new(r"(\d+) deletions?\(-\)").unwrap();

    let mut seen_summary = false;
    let mut files_changed = 0u64;
    let mut lines_added = 0u64;
    let mut lines_deleted = 0u64;

    for line in output.lines() {
        let files = files_re.captures(line);
        let inserts = insert_re.captures(line);
        let deletes = delete_re.captures(line);

        if files.is_none() && inserts.is_none() && deletes.is_none() {
            continue;
        }
        seen_summary = true;

        files_changed += capture_count(files);
        lines_added += capture_count(inserts);
        lines_deleted += capture_count(deletes);
    }

    seen_summary.then_some((files_changed, lines_added, lines_deleted))
}

fn capture_count(caps: Option<regex::Captures<'_>>) -> u64 {
    caps.and_then(|c| c[1].parse().ok()).unwrap_or(0)
}

/// The count is the leading number of the first shortlog line; anything else
/// reads as zero.
pub(crate) fn parse_commit_count(output: &str) -> u64 {
    let count_re = Regex::new(r"^\s*(\d+)").unwrap();
    count_re
        .captures(output)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_summary_lines() {
        let output = "\
commit abc\nAuthor: Alice\n\n    change things\n\n 2 files changed, 20 insertions(+), 10 deletions(-)\n
commit def\nAuthor: Alice\n\n    more\n\n 1 file changed, 5 insertions(+)\n";

        let (files, added, deleted) = parse_shortstat(output).unwrap();
        assert_eq!(files, 3);
        assert_eq!(added, 25);
        assert_eq!(deleted, 10);
    }

    #[test]
    fn handles_deletions_only_line() {
        let output = " 1 file changed, 4 deletions(-)\n";
        assert_eq!(parse_shortstat(output), Some((1, 0, 4)));
    }

    #[test]
    fn no_summary_lines_is_no_record() {
        let output = "commit abc\nAuthor: Alice\n\n    docs only, nothing listed\n";
        assert_eq!(parse_shortstat(output), None);
    }

    #[test]
    fn empty_output_is_no_record() {
        assert_eq!(parse_shortstat(""), None);
    }

    #[test]
    fn commit_count_reads_first_leading_number() {
        assert_eq!(parse_commit_count("    14\tAlice Example\n"), 14);
        assert_eq!(parse_commit_count(""), 0);
        assert_eq!(parse_commit_count("garbage\n"), 0);
    }

    #[test]
    fn log_query_applies_excludes_as_pathspec() {
        let range = DateRange::new("2024-01-01", "2024-02-01");
        let excludes = vec!["*.lock".to_string(), "vendor/*".to_string()];
        let args = log_args("Alice", &range, &excludes);

        let sep = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(args[sep + 1], ".");
        assert_eq!(args[sep + 2], ":(exclude)*.lock");
        assert_eq!(args[sep + 3], ":(exclude)vendor/*");
    }

    #[test]
    fn log_query_without_excludes_has_no_pathspec() {
        let range = DateRange::new("2024-01-01", "2024-02-01");
        let args = log_args("Alice", &range, &[]);
        assert!(!args.iter().any(|a| a == "--"));
    }

    #[test]
    fn commit_count_query_carries_no_pathspec_filter() {
        let range = DateRange::new("2024-01-01", "2024-02-01");
        let args = commit_count_args("Alice", &range);
        assert!(args.contains(&"--author=Alice".to_string()));
        assert!(!args.iter().any(|a| a.starts_with(":(exclude)")));
    }
}
