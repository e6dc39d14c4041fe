pub mod console;
pub mod csv;
pub mod json;

use crate::config::OutputFormat;
use crate::domain::model::UserStats;
use crate::utils::error::Result;

/// Renders the final ranked list to stdout in the selected format.
pub fn render(stats: &[UserStats], format: OutputFormat) -> Result<()> {
    let mut out = std::io::stdout();
    match format {
        OutputFormat::Pretty => console::write_console(stats, &mut out),
        OutputFormat::Csv => csv::write_csv(stats, &mut out),
        OutputFormat::Json => json::write_json(stats, &mut out),
    }
}
