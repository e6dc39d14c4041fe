use crate::utils::error::Result;
use async_trait::async_trait;

/// Port for running one git query against a repository working directory.
///
/// The single operation takes the query as an argv slice (the adapter decides
/// the binary) and returns captured standard output on success. Tests
/// substitute canned-text implementations so the pipeline never needs real
/// version-control tooling.
#[async_trait]
pub trait QueryRunner: Send + Sync {
    async fn run(&self, repo_path: &str, args: &[String]) -> Result<String>;
}
