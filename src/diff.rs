use crate::github::CommitFile;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// hunk-header span: text delimited by a pair of `@@` markers, non-greedy
fn hunk_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@@.*?@@").expect("hunk header pattern is valid"))
}

/// per-file record sent to the classifier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPatch {
    pub additions: u64,
    pub deletions: u64,
    pub lines: Vec<String>,
}

/// files surviving the exclusion set and the per-commit cap
#[derive(Debug)]
pub struct FilteredFileSet {
    pub files: Vec<CommitFile>,
    /// survivors dropped by the cap
    pub truncated: usize,
}

/// drop excluded filenames, then keep the first `max_files` survivors in the
/// order the host returned them
pub fn filter_files(
    files: Vec<CommitFile>,
    exclude: &HashSet<String>,
    max_files: usize,
) -> FilteredFileSet {
    let mut files: Vec<CommitFile> = files
        .into_iter()
        .filter(|file| !exclude.contains(&file.filename))
        .collect();
    let truncated = files.len().saturating_sub(max_files);
    files.truncate(max_files);
    FilteredFileSet { files, truncated }
}

/// strip hunk-header spans, trim each line, drop lines left empty.
/// malformed patch text comes out as zero lines, never an error.
pub fn normalize_patch(additions: u64, deletions: u64, patch: &str) -> NormalizedPatch {
    let stripped = hunk_header_re().replace_all(patch, "");
    let lines = stripped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    NormalizedPatch {
        additions,
        deletions,
        lines,
    }
}

/// serialize the filtered set as a filename-keyed JSON object, in set order
pub fn build_payload(files: &[CommitFile]) -> String {
    let mut payload = serde_json::Map::new();
    for file in files {
        let patch = file.patch.as_deref().unwrap_or("");
        let normalized = normalize_patch(file.additions, file.deletions, patch);
        let value = serde_json::to_value(&normalized).expect("normalized patch serializes to json");
        payload.insert(file.filename.clone(), value);
    }
    serde_json::to_string(&payload).expect("payload serializes to json")
}

/// truncate in place to at most `max_bytes`, backing up to a char boundary.
/// returns true if anything was cut.
pub fn clamp_payload(payload: &mut String, max_bytes: usize) -> bool {
    if payload.len() <= max_bytes {
        return false;
    }
    let mut cut = max_bytes;
    while !payload.is_char_boundary(cut) {
        cut -= 1;
    }
    payload.truncate(cut);
    true
}
