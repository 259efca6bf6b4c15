use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, prompt::templates};

/// Which output layout the model is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    /// Exact field-per-line layout, including a confidence tag.
    #[default]
    Structured,
    /// Loose plain-text answer.
    Legacy,
}

impl PromptVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptVariant::Structured => "structured",
            PromptVariant::Legacy => "legacy",
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "structured" => Ok(PromptVariant::Structured),
            "legacy" => Ok(PromptVariant::Legacy),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown prompt variant '{}', expected 'structured' or 'legacy'",
                other
            ))),
        }
    }
}

/// The system/user instruction pair sent with every image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub variant: PromptVariant,
    pub system_instruction: String,
    pub user_instruction: String,
}

impl PromptSpec {
    pub fn for_variant(variant: PromptVariant) -> Self {
        let (system_instruction, user_instruction) = templates::render(variant);

        Self {
            variant,
            system_instruction,
            user_instruction,
        }
    }
}
