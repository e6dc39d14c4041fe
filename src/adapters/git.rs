use crate::domain::ports::QueryRunner;
use crate::utils::error::{Result, StatsError};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Runs queries through the `git` binary in the repository directory.
///
/// Only standard output is captured for parsing; standard error is inherited
/// so git's own diagnostics stay visible to the operator. `GIT_DIR` and
/// `GIT_WORK_TREE` are cleared to avoid being affected by a git hooks
/// environment.
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryRunner for GitCli {
    async fn run(&self, repo_path: &str, args: &[String]) -> Result<String> {
        tracing::debug!("Running git {} in {}", args.join(" "), repo_path);

        let output = Command::new("git")
            .args(args)
            .current_dir(repo_path)
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await
            .map_err(|e| StatsError::CommandError {
                message: format!("failed to spawn git in {}: {}", repo_path, e),
            })?;

        if !output.status.success() {
            return Err(StatsError::CommandError {
                message: format!("git {} exited with {}", args.join(" "), output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
