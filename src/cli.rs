use crate::constants::DEFAULT_MAX_FILES;
use clap::Parser;

/// pr-spam-check: flag pull request commits whose diffs look like spam
#[derive(Parser, Debug)]
#[command(
    name = "pr-spam-check",
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// repository in owner/name form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// pull request number to check
    #[arg(long, env = "PR_NUMBER")]
    pub pr_number: u64,

    /// hosting API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// completion service API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_key: String,

    /// classify with the premium model tier
    #[arg(long, env = "SPAM_CHECK_PREMIUM_MODEL")]
    pub premium_model: bool,

    /// comma-separated filenames excluded from classification
    #[arg(long, env = "SPAM_CHECK_EXCLUDE", default_value = "")]
    pub exclude: String,

    /// maximum changed files sent per commit
    #[arg(long, env = "SPAM_CHECK_MAX_FILES", default_value_t = DEFAULT_MAX_FILES)]
    pub max_files: usize,

    /// print the prompt sent to the classifier
    #[arg(long)]
    pub debug_prompt: bool,

    /// print the full response from the classifier
    #[arg(long)]
    pub debug_response: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
