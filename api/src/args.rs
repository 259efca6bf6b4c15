use calorielens_core::{
    domain::{
        common::{AnalysisConfig, CalorieLensConfig, LLMConfig},
        food_analysis::value_objects::MimeLabel,
        prompt::entities::PromptVariant,
    },
    infrastructure::llm::openai_client::DEFAULT_BASE_URL,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "calorielens")]
#[command(about = "Estimate calories and macros from a photo of your meal")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "port", env = "SERVER_PORT", default_value_t = 8501)]
    pub port: u16,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LLMArgs {
    /// Credential for the vision service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: String,

    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalysisArgs {
    /// structured: exact field layout with a confidence tag; legacy: loose text
    #[arg(long, env = "PROMPT_VARIANT", default_value = "structured")]
    pub prompt_variant: PromptVariant,

    /// fixed: always label the image image/jpeg; detected: use the encoded format
    #[arg(long, env = "MIME_LABEL", default_value = "fixed")]
    pub mime_label: MimeLabel,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Emit logs as JSON lines
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,

    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
}

impl From<Args> for CalorieLensConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                openai_api_key: args.llm.openai_api_key,
                openai_base_url: args.llm.openai_base_url,
                model: args.llm.model,
            },
            analysis: AnalysisConfig {
                prompt_variant: args.analysis.prompt_variant,
                mime_label: args.analysis.mime_label,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from([
            "calorielens",
            "--openai-api-key",
            "sk-test",
            "--openai-base-url",
            "https://api.openai.com/v1",
            "--model",
            "gpt-4o",
            "--prompt-variant",
            "structured",
            "--mime-label",
            "fixed",
        ])
        .unwrap();

        let config = CalorieLensConfig::from(args);
        assert_eq!(config.llm.openai_api_key, "sk-test");
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.analysis.prompt_variant, PromptVariant::Structured);
        assert_eq!(config.analysis.mime_label, MimeLabel::Fixed);
    }

    #[test]
    fn test_variant_flags() {
        let args = Args::try_parse_from([
            "calorielens",
            "--openai-api-key",
            "sk-test",
            "--prompt-variant",
            "legacy",
            "--mime-label",
            "detected",
        ])
        .unwrap();

        assert_eq!(args.analysis.prompt_variant, PromptVariant::Legacy);
        assert_eq!(args.analysis.mime_label, MimeLabel::Detected);
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let result = Args::try_parse_from([
            "calorielens",
            "--openai-api-key",
            "sk-test",
            "--prompt-variant",
            "strict",
        ]);
        assert!(result.is_err());
    }
}
