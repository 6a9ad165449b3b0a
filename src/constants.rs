// hosting api
pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const USER_AGENT: &str = concat!("pr-spam-check/", env!("CARGO_PKG_VERSION"));

// classification
pub const OPENAI_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const STANDARD_MODEL: &str = "gpt-4o-mini";
pub const PREMIUM_MODEL: &str = "gpt-4o";

// payload
pub const DEFAULT_MAX_FILES: usize = 25;
pub const PAYLOAD_SIZE_WARNING_BYTES: usize = 50 * 1024;
pub const PAYLOAD_SIZE_MAXIMUM_BYTES: usize = 100 * 1024;

// retries
pub const HTTP_RETRY_ATTEMPTS: u32 = 3;
pub const HTTP_RETRY_INITIAL_DELAY_SECS: u64 = 1;
