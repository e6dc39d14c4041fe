use crate::config::{OutputFormat, TimePeriod};
use crate::domain::model::{DateRange, ExecutionContext, Repository, UserMapping};
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub repositories: Vec<Repository>,
    #[serde(default)]
    pub user_mappings: Vec<UserMapping>,
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    pub period: TimePeriod,
    pub format: OutputFormat,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_list("repositories", &self.repositories)?;

        for repo in &self.repositories {
            validation::validate_non_empty_string("repositories.name", &repo.name)?;
            validation::validate_path("repositories.path", &repo.path)?;
        }

        for mapping in &self.user_mappings {
            validation::validate_non_empty_string(
                "user_mappings.primary_name",
                &mapping.primary_name,
            )?;
        }

        Ok(())
    }

    /// Bundles the configured repositories, mappings and excludes with the
    /// computed window into one context for the aggregation run.
    pub fn execution_context(&self, date_range: DateRange) -> ExecutionContext {
        ExecutionContext {
            repositories: self.repositories.clone(),
            user_mappings: self.user_mappings.clone(),
            exclude_patterns: self.exclude_patterns.clone(),
            date_range,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
