use crate::config::Config;
use crate::constants::OPENAI_COMPLETIONS_URL;
use crate::error::CheckError;
use crate::http;
use crate::info;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

/// external natural-language judge of commit content
pub trait SpamOracle {
    /// true if the serialized payload is classified as spam
    fn classify(&self, payload: &str) -> Result<bool, CheckError>;
}

const SYSTEM_PROMPT: &str = "You are a highly experienced open source contributor. \
You are responsible for analyzing the content of a commit and determining whether \
it is spammy or not. Text or code additions that are malicious, nonsensical in \
their context, made up of random identifiers or links, or that only shuffle \
letter case count as spam. Respond with exactly one word: 'spam' if the content \
is spammy, 'good' otherwise.";

fn user_prompt(payload: &str) -> String {
    format!("analyze the following content and determine if it is spammy:\n\n{payload}")
}

fn request_body(model: &str, payload: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "temperature": 0,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": user_prompt(payload) },
        ],
    })
}

/// the oracle is told to answer a bare token, so try the closed set first;
/// fall back to the substring heuristic for responses with surrounding text
pub fn parse_verdict(response: &str) -> bool {
    match response.trim().to_lowercase().as_str() {
        "spam" => true,
        "good" => false,
        other => other.contains("spam"),
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// chat-completions-backed `SpamOracle`
pub struct OpenAiOracle<'a> {
    config: &'a Config,
}

impl<'a> OpenAiOracle<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

impl SpamOracle for OpenAiOracle<'_> {
    fn classify(&self, payload: &str) -> Result<bool, CheckError> {
        let body = request_body(self.config.model_tier.model_name(), payload);

        if self.config.debug_prompt {
            use colored::Colorize;
            use std::io::Write;
            let _ = writeln!(std::io::stdout(), "\n{}", body.to_string().dimmed());
        }

        // spinner while waiting on the model; hidden on non-tty CI output
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner}")
                .expect("invalid spinner template"),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let result = http::with_retry("completion request", || {
            ureq::post(OPENAI_COMPLETIONS_URL)
                .header("Authorization", format!("Bearer {}", self.config.openai_key))
                .send_json(&body)?
                .body_mut()
                .read_json::<ChatCompletion>()
        });

        spinner.finish_and_clear();

        let completion = result?;
        let response = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                CheckError::UpstreamRequest("completion response contained no choices".into())
            })?;

        if self.config.debug_response {
            use colored::Colorize;
            info!("{}", response.dimmed());
        }

        Ok(parse_verdict(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tokens_parse_exactly() {
        assert!(parse_verdict("spam"));
        assert!(parse_verdict(" SPAM\n"));
        assert!(!parse_verdict("good"));
        assert!(!parse_verdict("Good"));
    }

    #[test]
    fn wrapped_responses_fall_back_to_substring_match() {
        assert!(parse_verdict("Result: SPAM"));
        assert!(!parse_verdict("good, no issues"));
        assert!(parse_verdict("this looks Spammy"));
    }

    #[test]
    fn unrecognized_response_without_spam_is_good() {
        assert!(!parse_verdict("nothing suspicious here"));
        assert!(!parse_verdict(""));
    }

    #[test]
    fn request_body_composes_system_and_user_messages() {
        let body = request_body("gpt-4o-mini", r#"{"a.rs":{}}"#);
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0);
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert!(
            messages[0]["content"]
                .as_str()
                .unwrap()
                .contains("experienced open source contributor")
        );
        assert_eq!(messages[1]["role"], "user");
        assert!(messages[1]["content"].as_str().unwrap().contains(r#"{"a.rs":{}}"#));
    }

    #[test]
    fn deserializes_completion_response() {
        let raw = r#"{
            "id": "chatcmpl-abc123",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "good" },
                    "finish_reason": "stop"
                }
            ],
            "usage": { "prompt_tokens": 120, "completion_tokens": 1 }
        }"#;
        let completion: ChatCompletion = serde_json::from_str(raw).unwrap();
        assert_eq!(completion.choices[0].message.content, "good");
    }
}
