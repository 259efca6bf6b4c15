use tracing::info;

use crate::{
    domain::common::{CalorieLensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::OpenAIVisionClient,
};

pub type CalorieLensService = Service<OpenAIVisionClient>;

/// Wires the vision client into the service. Called once at startup.
pub fn create_service(config: CalorieLensConfig) -> Result<CalorieLensService, CoreError> {
    if config.llm.openai_api_key.trim().is_empty() {
        return Err(CoreError::InvalidConfig(
            "OPENAI_API_KEY must not be empty".to_string(),
        ));
    }

    let vision_client =
        OpenAIVisionClient::new(config.llm.openai_api_key, config.llm.openai_base_url);

    info!(
        model = %config.llm.model,
        prompt_variant = %config.analysis.prompt_variant,
        mime_label = %config.analysis.mime_label,
        "analysis service ready"
    );

    Ok(Service::new(vision_client, config.llm.model, config.analysis))
}
