// Document drafting: prompt construction, the generation boundary, and the download artifact.
// All LLM calls go through llm_client — nothing here talks HTTP to OpenAI directly.

pub mod download;
pub mod generator;
pub mod prompt_builder;
pub mod prompts;
