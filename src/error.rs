/// Failure taxonomy for one check run.
///
/// Library modules return this type directly; `main` converts to
/// `anyhow::Error` at the boundary. Both variants are fatal to the run:
/// there is no partial aggregation after a failure.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// a collaborator API returned a failure status or the transport failed
    #[error("upstream request failed: {0}")]
    UpstreamRequest(String),

    /// a required configuration value is absent or malformed
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_displays_message() {
        let err = CheckError::UpstreamRequest("GET /commits: status 502".into());
        assert_eq!(
            err.to_string(),
            "upstream request failed: GET /commits: status 502"
        );
    }

    #[test]
    fn configuration_error_displays_message() {
        let err = CheckError::Configuration("PR_NUMBER is not a number".into());
        assert!(err.to_string().contains("PR_NUMBER"));
    }
}
