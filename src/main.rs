mod cli;
mod config;
mod constants;
mod diff;
mod error;
mod github;
mod http;
mod oracle;
mod pipeline;
mod ui;

use crate::cli::Cli;
use crate::config::Config;
use crate::github::GitHubHost;
use crate::oracle::OpenAiOracle;
use crate::pipeline::RunResult;
use anyhow::Result;

fn main() {
    // exit 0 = clean, 1 = spam found, 2 = run aborted without a verdict
    let config = match Config::from_cli(Cli::parse_args()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    match run(&config) {
        Ok(result) if result.any_spam() => std::process::exit(1),
        Ok(_) => {}
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    }
}

fn run(config: &Config) -> Result<RunResult> {
    let host = GitHubHost::new(config);
    let oracle = OpenAiOracle::new(config);
    let result = pipeline::run_checks(&host, &oracle, config)?;
    summarize(&result);
    Ok(result)
}

/// trailing aggregate line after the per-commit output
fn summarize(result: &RunResult) {
    let spammy: Vec<&str> = result
        .verdicts
        .iter()
        .filter(|verdict| verdict.is_spam)
        .map(|verdict| verdict.sha.as_str())
        .collect();
    if !spammy.is_empty() {
        warning!(
            "{} of {} classified commit(s) look spammy: {}",
            spammy.len(),
            result.verdicts.len(),
            spammy.join(", ")
        );
    } else if result.verdicts.is_empty() {
        if result.skipped > 0 {
            status!(
                "all {} commit(s) were merge commits, nothing classified",
                result.skipped
            );
        } else {
            status!("no commits to check");
        }
    } else {
        status!("no spam detected");
    }
}
