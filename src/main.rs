use anyhow::Context;
use clap::Parser;
use git_stats_aggregator::utils::{logger, validation::Validate};
use git_stats_aggregator::{aggregate_stats, report, AppConfig, CliConfig, GitCli, RepoOutcome};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting git-stats aggregation");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Error loading configuration from {}: {}", cli.config, e);
            eprintln!("❌ Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let format = cli.format.unwrap_or(config.defaults.format);
    let period = cli.period.unwrap_or(config.defaults.period);

    let range = match period.date_range(cli.since.clone(), cli.until.clone()) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Aggregating git stats from {} to {}", range.since, range.until);

    let ctx = config.execution_context(range);
    let runner = Arc::new(GitCli::new());
    let run_report = aggregate_stats(&runner, &ctx).await;

    for outcome in &run_report.outcomes {
        match outcome {
            RepoOutcome::Collected {
                repository,
                contributors,
            } => {
                tracing::info!("✅ {}: {} contributor(s) with activity", repository, contributors)
            }
            RepoOutcome::Skipped { repository, reason } => {
                tracing::warn!("❌ {} skipped: {}", repository, reason)
            }
        }
    }

    report::render(&run_report.stats, format).context("failed to render report")?;

    Ok(())
}
