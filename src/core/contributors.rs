use crate::domain::model::DateRange;
use crate::domain::ports::QueryRunner;
use regex::Regex;

/// Lists the distinct contributor identities active in the repository within
/// the date window, in the order git emits them (descending commit count).
///
/// A failing query is absorbed: the repository simply appears to have no
/// contributors, and a warning is logged.
pub async fn list_contributors<R: QueryRunner + ?Sized>(
    runner: &R,
    repo_path: &str,
    range: &DateRange,
) -> Vec<String> {
    let args = shortlog_args(range);

    match runner.run(repo_path, &args).await {
        Ok(output) => parse_shortlog(&output),
        Err(e) => {
            tracing::warn!("Error getting contributors in {}: {}", repo_path, e);
            Vec::new()
        }
    }
}

/// `HEAD` is pinned explicitly: without it, `git shortlog` reads commit data
/// from stdin when not attached to a terminal.
pub(crate) fn shortlog_args(range: &DateRange) -> Vec<String> {
    vec![
        "shortlog".to_string(),
        "-sn".to_string(),
        "--no-merges".to_string(),
        format!("--since={}", range.since),
        format!("--before={}", range.until),
        "HEAD".to_string(),
    ]
}

/// Parses `git shortlog -sn` output: one `<count><ws><name>` entry per line.
/// Lines that do not match are dropped.
pub(crate) fn parse_shortlog(output: &str) -> Vec<String> {
    let line_re = Regex::new(r"^\s*\d+\s+(.+)$").unwrap();

    output
        .lines()
        .filter_map(|line| line_re.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_counts_and_names() {
        let output = "    12\tAlice Example\n     3\tBob Builder\n";
        assert_eq!(parse_shortlog(output), vec!["Alice Example", "Bob Builder"]);
    }

    #[test]
    fn preserves_git_emission_order() {
        let output = "  5 Zoe\n  5 Adam\n  1 Mallory\n";
        assert_eq!(parse_shortlog(output), vec!["Zoe", "Adam", "Mallory"]);
    }

    #[test]
    fn drops_lines_without_a_leading_count() {
        let output = "   4\tAlice\nnot a shortlog line\n\n   2\tBob\n";
        assert_eq!(parse_shortlog(output), vec!["Alice", "Bob"]);
    }

    #[test]
    fn empty_output_yields_empty_list() {
        assert!(parse_shortlog("").is_empty());
    }

    #[test]
    fn shortlog_query_carries_window_and_head() {
        let range = DateRange::new("2024-01-01", "2024-02-01");
        let args = shortlog_args(&range);
        assert!(args.contains(&"--since=2024-01-01".to_string()));
        assert!(args.contains(&"--before=2024-02-01".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("HEAD"));
    }
}
