use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, food_analysis::value_objects::ImageSource,
    prompt::entities::PromptVariant,
};

/// Outcome of one analysis. `raw_text` is exactly what the model returned
/// and is what gets displayed; `kind` is a best-effort reading of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionAnalysis {
    pub id: Uuid,
    pub source: ImageSource,
    pub model: String,
    pub prompt_variant: PromptVariant,
    pub raw_text: String,
    pub kind: AnalysisKind,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", content = "estimate", rename_all = "snake_case")]
pub enum AnalysisKind {
    /// Every required field was found in the answer.
    Structured(NutritionEstimate),
    /// Low confidence: the answer did not follow the requested layout.
    Unparsed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionEstimate {
    pub food_name: String,
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub serving_size: Option<String>,
    pub calories_kcal: f64,
    pub macros: Macros,
    pub confidence: Option<Confidence>,
}

/// Grams per serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Macros {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Self-reported by the model, never verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl NutritionAnalysis {
    pub fn new(
        id: Uuid,
        source: ImageSource,
        model: String,
        prompt_variant: PromptVariant,
        raw_text: String,
        kind: AnalysisKind,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id,
            source,
            model,
            prompt_variant,
            raw_text,
            kind,
            analyzed_at: now,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self.kind, AnalysisKind::Structured(_))
    }
}
