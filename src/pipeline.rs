use crate::config::Config;
use crate::constants::{PAYLOAD_SIZE_MAXIMUM_BYTES, PAYLOAD_SIZE_WARNING_BYTES};
use crate::diff;
use crate::error::CheckError;
use crate::github::CommitHost;
use crate::oracle::SpamOracle;
use crate::{info, status, warning};

/// spam decision for one classified commit
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub sha: String,
    pub is_spam: bool,
}

/// outcome of one run over a pull request
#[derive(Debug, Default)]
pub struct RunResult {
    pub verdicts: Vec<Verdict>,
    /// merge commits not classified
    pub skipped: usize,
}

impl RunResult {
    /// OR over recorded verdicts; vacuously false with nothing classified
    pub fn any_spam(&self) -> bool {
        self.verdicts.iter().any(|verdict| verdict.is_spam)
    }
}

/// enumerate the pull request's commits and classify each non-merge commit,
/// printing one verdict or skip line per commit
pub fn run_checks(
    host: &dyn CommitHost,
    oracle: &dyn SpamOracle,
    config: &Config,
) -> Result<RunResult, CheckError> {
    let commits = host.pr_commits()?;
    status!(
        "checking {} commit(s) on {}#{}",
        commits.len(),
        config.repo,
        config.pr_number
    );

    let mut result = RunResult::default();
    for commit in &commits {
        if commit.is_merge() {
            info!("Commit {} is a merge commit, skipping.", commit.sha);
            result.skipped += 1;
            continue;
        }

        let files = host.commit_files(commit)?;
        let filtered = diff::filter_files(files, &config.exclude, config.max_files);
        if filtered.truncated > 0 {
            info!(
                "(commit {}: +{} more files not sent)",
                commit.sha, filtered.truncated
            );
        }

        let mut payload = diff::build_payload(&filtered.files);
        if diff::clamp_payload(&mut payload, PAYLOAD_SIZE_MAXIMUM_BYTES) {
            warning!(
                "commit {} diff truncated to {} chars",
                commit.sha,
                PAYLOAD_SIZE_MAXIMUM_BYTES
            );
        } else if payload.len() > PAYLOAD_SIZE_WARNING_BYTES {
            warning!(
                "commit {} diff is large ({} chars), this may use many tokens",
                commit.sha,
                payload.len()
            );
        }

        let is_spam = oracle.classify(&payload)?;
        if is_spam {
            info!("Commit {} looks spammy.", commit.sha);
        } else {
            info!("Commit {} looks good.", commit.sha);
        }
        result.verdicts.push(Verdict {
            sha: commit.sha.clone(),
            is_spam,
        });
    }

    Ok(result)
}
