//! Run configuration: command-line flags, action inputs, and CI fallbacks.
//!
//! Every option can be given as a flag or through the `INPUT_*` environment
//! variable GitHub Actions sets for action inputs. Actions sets unused inputs
//! to the empty string, so empty values count as unset throughout.

use clap::{Parser, ValueEnum};
use github::{GithubClientConfig, DEFAULT_API_URL};
use thiserror::Error;
use tracker::{
    IssueTitle, Label, OwnerName, RepositoryId, RepositoryName, Scope, SyncConfig, TrackerError,
    DEFAULT_TRACKER_AUTHOR,
};

/// Output format of the log stream on stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Parser)]
#[command(
    name = "label-tracker",
    version,
    about = "Maintain a tracking issue listing every issue that carries a label"
)]
pub struct CliArgs {
    /// Label whose issues are tracked.
    #[arg(long, env = "INPUT_LABEL")]
    pub label: Option<String>,

    /// Exact title of the tracking issue.
    #[arg(long, env = "INPUT_ISSUE_TITLE")]
    pub issue_title: Option<String>,

    /// API token. Defaults to $GITHUB_TOKEN.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository owner or organization. Defaults to the owner in $GITHUB_REPOSITORY.
    #[arg(long, env = "INPUT_REPO_OWNER")]
    pub repo_owner: Option<String>,

    /// Repository hosting the tracking issue. Defaults to the name in $GITHUB_REPOSITORY.
    #[arg(long, env = "INPUT_REPO_NAME")]
    pub repo_name: Option<String>,

    /// Track issues in every repository of the owner.
    #[arg(
        long,
        env = "INPUT_ORG_LEVEL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub org_level: Option<String>,

    /// Search qualifier for the account that authors the tracking issue.
    #[arg(long, env = "INPUT_TRACKER_AUTHOR")]
    pub tracker_author: Option<String>,

    /// GitHub API root.
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Log output format: `text` or `json`.
    #[arg(long, env = "LOG_FORMAT")]
    pub log_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Input required and not supplied: {name}")]
    MissingInput { name: &'static str },

    #[error("could not determine the repository {part}: set `{input}` or GITHUB_REPOSITORY")]
    MissingRepository {
        part: &'static str,
        input: &'static str,
    },

    #[error("input `{name}` must be one of true, True, TRUE, false, False, FALSE (got '{value}')")]
    InvalidBoolean { name: &'static str, value: String },

    #[error("log format must be `text` or `json` (got '{value}')")]
    InvalidLogFormat { value: String },
}

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        TrackerError::Configuration {
            message: err.to_string(),
        }
    }
}

/// Everything a run needs, after defaults and fallbacks are applied.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub sync: SyncConfig,
    pub github: GithubClientConfig,
}

/// Resolves `args` into a run configuration.
///
/// `env` looks up the CI fallbacks (`GITHUB_TOKEN`, `GITHUB_REPOSITORY`). No
/// network access happens here, so configuration errors surface before the
/// first API call.
pub fn resolve(
    args: &CliArgs,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    let label = non_empty(&args.label)
        .and_then(Label::new)
        .ok_or(ConfigError::MissingInput { name: "label" })?;
    let issue_title = non_empty(&args.issue_title)
        .and_then(IssueTitle::new)
        .ok_or(ConfigError::MissingInput { name: "issue_title" })?;
    let scope = Scope::from_org_level(parse_bool("org_level", non_empty(&args.org_level))?);

    let invoking = env("GITHUB_REPOSITORY").and_then(|r| RepositoryId::parse(&r));
    let owner = non_empty(&args.repo_owner)
        .and_then(OwnerName::new)
        .or_else(|| invoking.as_ref().map(|r| r.owner().clone()))
        .ok_or(ConfigError::MissingRepository {
            part: "owner",
            input: "repo_owner",
        })?;
    let name = non_empty(&args.repo_name)
        .and_then(RepositoryName::new)
        .or_else(|| invoking.as_ref().map(|r| r.name().clone()))
        .ok_or(ConfigError::MissingRepository {
            part: "name",
            input: "repo_name",
        })?;

    let author =
        non_empty(&args.tracker_author).unwrap_or_else(|| DEFAULT_TRACKER_AUTHOR.to_string());
    let token = non_empty(&args.token).or_else(|| env("GITHUB_TOKEN").filter(|t| !t.is_empty()));
    let api_url = non_empty(&args.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());

    Ok(ResolvedConfig {
        sync: SyncConfig {
            repository: RepositoryId::new(owner, name),
            label,
            issue_title,
            scope,
            author,
        },
        github: GithubClientConfig { api_url, token },
    })
}

/// Resolves the log format. Needed before the subscriber exists, so it is
/// read separately from the rest of the configuration.
pub fn log_format(args: &CliArgs) -> Result<LogFormat, ConfigError> {
    match non_empty(&args.log_format) {
        None => Ok(LogFormat::default()),
        Some(value) => <LogFormat as ValueEnum>::from_str(&value, true)
            .map_err(|_| ConfigError::InvalidLogFormat { value }),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parses a boolean input the way GitHub Actions does: only the YAML 1.2
/// core-schema spellings are accepted. Unset means `false`.
fn parse_bool(name: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref() {
        None => Ok(false),
        Some("true" | "True" | "TRUE") => Ok(true),
        Some("false" | "False" | "FALSE") => Ok(false),
        Some(other) => Err(ConfigError::InvalidBoolean {
            name,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
