//! Prompt Builder — turns a topic and optional details into the system + user message pair.
//!
//! Input is embedded verbatim: no escaping, trimming or length limiting.

use crate::drafting::prompts::{
    DOCUMENT_SYSTEM_PROMPT, DOCUMENT_USER_INSTRUCTION, NO_ADDITIONAL_INFO,
};
use crate::llm_client::Prompt;

/// Builds the drafting prompt. `info` falls back to "none" only when it is the empty string.
pub fn build_prompt(topic: &str, info: &str) -> Prompt {
    let info = if info.is_empty() {
        NO_ADDITIONAL_INFO
    } else {
        info
    };

    Prompt {
        system: DOCUMENT_SYSTEM_PROMPT.to_string(),
        user: format!(
            "Topic: {topic}\n\n[Additional information]\n{info}\n\n{DOCUMENT_USER_INSTRUCTION}"
        ),
    }
}
