use crate::cli::Cli;
use crate::constants::{PREMIUM_MODEL, STANDARD_MODEL};
use crate::error::CheckError;
use std::collections::HashSet;

/// quality tier of the classification model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Standard,
    Premium,
}

impl ModelTier {
    pub fn model_name(self) -> &'static str {
        match self {
            ModelTier::Standard => STANDARD_MODEL,
            ModelTier::Premium => PREMIUM_MODEL,
        }
    }
}

/// validated run configuration, built once at startup and passed by
/// reference into each component
#[derive(Debug, Clone)]
pub struct Config {
    /// repository in owner/name form
    pub repo: String,
    pub pr_number: u64,
    pub github_token: String,
    pub openai_key: String,
    pub model_tier: ModelTier,
    /// exact filenames never sent for classification
    pub exclude: HashSet<String>,
    /// most changed files sent per commit
    pub max_files: usize,
    pub debug_prompt: bool,
    pub debug_response: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, CheckError> {
        let repo = cli.repo.trim().to_string();
        match repo.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => {}
            _ => {
                return Err(CheckError::Configuration(format!(
                    "repository must be in owner/name form, got {repo:?}"
                )));
            }
        }
        if cli.pr_number == 0 {
            return Err(CheckError::Configuration(
                "pull request number must be positive".into(),
            ));
        }
        if cli.github_token.trim().is_empty() {
            return Err(CheckError::Configuration(
                "hosting API token is empty".into(),
            ));
        }
        if cli.openai_key.trim().is_empty() {
            return Err(CheckError::Configuration(
                "completion service API key is empty".into(),
            ));
        }
        if cli.max_files == 0 {
            return Err(CheckError::Configuration(
                "maximum file count must be at least 1".into(),
            ));
        }

        Ok(Self {
            repo,
            pr_number: cli.pr_number,
            github_token: cli.github_token,
            openai_key: cli.openai_key,
            model_tier: if cli.premium_model {
                ModelTier::Premium
            } else {
                ModelTier::Standard
            },
            exclude: parse_exclude_list(&cli.exclude),
            max_files: cli.max_files,
            debug_prompt: cli.debug_prompt,
            debug_response: cli.debug_response,
        })
    }
}

/// split a comma-separated filename list, dropping empty entries
pub fn parse_exclude_list(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
