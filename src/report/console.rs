use crate::domain::model::UserStats;
use crate::utils::error::Result;
use std::io::Write;

const USER_NAME_WIDTH: usize = 30;
const FILES_WIDTH: usize = 15;
const ADDED_WIDTH: usize = 15;
const DELETED_WIDTH: usize = 15;
const DELTA_WIDTH: usize = 20;
const RATIO_WIDTH: usize = 21;
const COMMITS_WIDTH: usize = 15;

/// Fixed-width table for terminal reading.
pub fn write_console<W: Write>(stats: &[UserStats], out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<uw$} | {:<fw$} | {:<aw$} | {:<dw$} | {:<tw$} | {:<rw$} | {:<cw$}",
        "User name",
        "Files changed",
        "Lines added",
        "Lines deleted",
        "Total lines (delta)",
        "Add./Del. ratio (1:n)",
        "Commit count",
        uw = USER_NAME_WIDTH,
        fw = FILES_WIDTH,
        aw = ADDED_WIDTH,
        dw = DELETED_WIDTH,
        tw = DELTA_WIDTH,
        rw = RATIO_WIDTH,
        cw = COMMITS_WIDTH,
    )?;

    writeln!(
        out,
        "{} | {} | {} | {} | {} | {} | {}",
        "-".repeat(USER_NAME_WIDTH),
        "-".repeat(FILES_WIDTH),
        "-".repeat(ADDED_WIDTH),
        "-".repeat(DELETED_WIDTH),
        "-".repeat(DELTA_WIDTH),
        "-".repeat(RATIO_WIDTH),
        "-".repeat(COMMITS_WIDTH),
    )?;

    for user in stats {
        writeln!(
            out,
            "{:<uw$} | {:<fw$} | {:<aw$} | {:<dw$} | {:<tw$} | {:<rw$} | {:<cw$}",
            user.user_name,
            user.stats.files_changed,
            user.stats.lines_added,
            user.stats.lines_deleted,
            user.stats.total_delta,
            format!("{:.6}", user.stats.ratio),
            user.stats.commit_count,
            uw = USER_NAME_WIDTH,
            fw = FILES_WIDTH,
            aw = ADDED_WIDTH,
            dw = DELETED_WIDTH,
            tw = DELTA_WIDTH,
            rw = RATIO_WIDTH,
            cw = COMMITS_WIDTH,
        )?;
    }

    Ok(())
}
