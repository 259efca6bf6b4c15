use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::{food_analysis::value_objects::MimeLabel, prompt::entities::PromptVariant};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CalorieLensConfig {
    pub llm: LLMConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
}

// The credential must never end up in logs.
impl std::fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LLMConfig")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnalysisConfig {
    pub prompt_variant: PromptVariant,
    pub mime_label: MimeLabel,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
