use crate::config::Config;
use crate::constants::{GITHUB_ACCEPT, GITHUB_API_BASE, USER_AGENT};
use crate::error::CheckError;
use crate::http;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// source of commit and diff data for one pull request
pub trait CommitHost {
    /// ordered list of commits currently attached to the pull request
    fn pr_commits(&self) -> Result<Vec<Commit>, CheckError>;

    /// changed files of one commit, in the order the host returns them
    fn commit_files(&self, commit: &Commit) -> Result<Vec<CommitFile>, CheckError>;
}

/// one changeset within the pull request
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    pub sha: String,
    /// API url for fetching this commit's diff
    pub url: String,
    #[serde(default)]
    pub parents: Vec<CommitParent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitParent {
    pub sha: String,
}

impl Commit {
    /// more than one parent means a merge commit
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }
}

/// one changed file within a commit
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommitFile {
    pub filename: String,
    pub additions: u64,
    pub deletions: u64,
    /// unified-diff fragment for this file; absent for binary files
    #[serde(default)]
    pub patch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    #[serde(default)]
    files: Vec<CommitFile>,
}

/// GitHub-backed `CommitHost`
pub struct GitHubHost<'a> {
    config: &'a Config,
}

impl<'a> GitHubHost<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn get_json<T: DeserializeOwned>(&self, what: &str, url: &str) -> Result<T, CheckError> {
        http::with_retry(what, || {
            ureq::get(url)
                .header("Authorization", format!("Bearer {}", self.config.github_token))
                .header("Accept", GITHUB_ACCEPT)
                .header("User-Agent", USER_AGENT)
                .call()?
                .body_mut()
                .read_json::<T>()
        })
    }
}

impl CommitHost for GitHubHost<'_> {
    fn pr_commits(&self) -> Result<Vec<Commit>, CheckError> {
        let url = format!(
            "{GITHUB_API_BASE}/repos/{}/pulls/{}/commits?per_page=100",
            self.config.repo, self.config.pr_number
        );
        self.get_json("fetch pull request commits", &url)
    }

    fn commit_files(&self, commit: &Commit) -> Result<Vec<CommitFile>, CheckError> {
        let detail: CommitDetail = self.get_json("fetch commit diff", &commit.url)?;
        Ok(detail.files)
    }
}
