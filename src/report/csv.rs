use crate::domain::model::UserStats;
use crate::utils::error::Result;
use std::io::Write;

/// Semicolon-separated CSV; the writer handles quoting of names containing
/// the delimiter, quotes or newlines.
pub fn write_csv<W: Write>(stats: &[UserStats], out: &mut W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record([
        "User name",
        "Files changed",
        "Lines added",
        "Lines deleted",
        "Total lines (delta)",
        "Add./Del. ratio (1:n)",
        "Commit count",
    ])?;

    for user in stats {
        let record = [
            user.user_name.clone(),
            user.stats.files_changed.to_string(),
            user.stats.lines_added.to_string(),
            user.stats.lines_deleted.to_string(),
            user.stats.total_delta.to_string(),
            format!("{:.6}", user.stats.ratio),
            user.stats.commit_count.to_string(),
        ];
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GitStats;

    #[test]
    fn writes_semicolon_rows_with_fixed_ratio_precision() {
        let stats = vec![UserStats {
            user_name: "Alice".to_string(),
            stats: GitStats::from_counts(6, 150, 30, 8),
        }];

        let mut buf = Vec::new();
        write_csv(&stats, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "User name;Files changed;Lines added;Lines deleted;Total lines (delta);Add./Del. ratio (1:n);Commit count"
        );
        assert_eq!(lines[1], "Alice;6;150;30;120;0.200000;8");
    }

    #[test]
    fn quotes_names_containing_the_delimiter() {
        let stats = vec![UserStats {
            user_name: "Liu; Alice".to_string(),
            stats: GitStats::from_counts(1, 10, 0, 1),
        }];

        let mut buf = Vec::new();
        write_csv(&stats, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.lines().nth(1).unwrap().starts_with("\"Liu; Alice\";"));
    }
}
