use crate::domain::model::UserStats;
use crate::utils::error::Result;
use chrono::Utc;
use std::io::Write;

/// JSON envelope: run timestamp, record count and the flat stats records.
pub fn write_json<W: Write>(stats: &[UserStats], out: &mut W) -> Result<()> {
    let envelope = serde_json::json!({
        "timestamp": Utc::now().to_rfc3339(),
        "user_count": stats.len(),
        "stats": stats,
    });

    writeln!(out, "{}", serde_json::to_string_pretty(&envelope)?)?;
    Ok(())
}
