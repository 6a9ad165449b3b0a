use crate::constants::{HTTP_RETRY_ATTEMPTS, HTTP_RETRY_INITIAL_DELAY_SECS};
use crate::error::CheckError;
use crate::warning;
use std::time::Duration;

/// failures worth a second attempt: rate limits, server errors, timeouts,
/// transport-level IO. other status failures (auth, not-found) are permanent.
fn is_retryable(err: &ureq::Error) -> bool {
    match err {
        ureq::Error::StatusCode(code) => *code == 429 || *code >= 500,
        ureq::Error::Timeout(_) | ureq::Error::Io(_) | ureq::Error::ConnectionFailed => true,
        _ => false,
    }
}

/// run a blocking http call, retrying retryable failures with doubling
/// backoff. exhausted retries surface as `UpstreamRequest` and abort the run.
pub fn with_retry<T>(
    what: &str,
    mut call: impl FnMut() -> Result<T, ureq::Error>,
) -> Result<T, CheckError> {
    let mut delay = Duration::from_secs(HTTP_RETRY_INITIAL_DELAY_SECS);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match call() {
            Ok(value) => return Ok(value),
            Err(err) if attempt < HTTP_RETRY_ATTEMPTS && is_retryable(&err) => {
                warning!("{}: {} (retrying in {}s)", what, err, delay.as_secs());
                std::thread::sleep(delay);
                delay *= 2;
            }
            Err(err) => return Err(CheckError::UpstreamRequest(format!("{what}: {err}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_server_errors_are_retryable() {
        assert!(is_retryable(&ureq::Error::StatusCode(429)));
        assert!(is_retryable(&ureq::Error::StatusCode(500)));
        assert!(is_retryable(&ureq::Error::StatusCode(503)));
    }

    #[test]
    fn client_errors_are_permanent() {
        assert!(!is_retryable(&ureq::Error::StatusCode(401)));
        assert!(!is_retryable(&ureq::Error::StatusCode(404)));
        assert!(!is_retryable(&ureq::Error::StatusCode(422)));
    }

    #[test]
    fn transport_failures_are_retryable() {
        assert!(is_retryable(&ureq::Error::ConnectionFailed));
        assert!(is_retryable(&ureq::Error::Io(std::io::Error::other(
            "connection reset"
        ))));
    }

    #[test]
    fn permanent_failure_returns_upstream_error_without_retry() {
        let mut calls = 0;
        let result: Result<(), CheckError> = with_retry("probe", || {
            calls += 1;
            Err(ureq::Error::StatusCode(403))
        });
        assert_eq!(calls, 1);
        let err = result.unwrap_err();
        assert!(matches!(err, CheckError::UpstreamRequest(_)));
        assert!(err.to_string().contains("probe"));
    }

    #[test]
    fn first_success_short_circuits() {
        let mut calls = 0;
        let result = with_retry("probe", || {
            calls += 1;
            Ok(41 + 1)
        });
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
    }
}
