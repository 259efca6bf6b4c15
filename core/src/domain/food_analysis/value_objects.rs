use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Upper bound on generated tokens, whatever the image.
pub const MAX_OUTPUT_TOKENS: u32 = 250;

/// Content type the vision endpoint is told the image has.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Input channel the image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Upload,
    Camera,
}

/// How the data URI labels the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MimeLabel {
    /// Always `image/jpeg`.
    #[default]
    Fixed,
    /// Content type of the format actually encoded.
    Detected,
}

impl fmt::Display for MimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MimeLabel::Fixed => f.write_str("fixed"),
            MimeLabel::Detected => f.write_str("detected"),
        }
    }
}

impl FromStr for MimeLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(MimeLabel::Fixed),
            "detected" => Ok(MimeLabel::Detected),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown mime label '{}', expected 'fixed' or 'detected'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeImageInput {
    pub source: ImageSource,
    pub image_data: Vec<u8>,
}

/// One outbound call: two instruction texts and exactly one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionRequest {
    pub model: String,
    pub system_instruction: String,
    pub user_instruction: String,
    pub image_url: String,
    pub max_output_tokens: u32,
}
