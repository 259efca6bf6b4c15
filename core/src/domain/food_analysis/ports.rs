use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::NutritionAnalysis,
        value_objects::{AnalyzeImageInput, VisionRequest},
    },
};

/// Client for a hosted multimodal chat model
#[cfg_attr(test, mockall::automock)]
pub trait VisionClient: Send + Sync {
    /// Sends one request and returns the completion text untouched.
    fn complete(
        &self,
        request: VisionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food photo analysis
#[cfg_attr(test, mockall::automock)]
pub trait NutritionAnalysisService: Send + Sync {
    fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> impl Future<Output = Result<NutritionAnalysis, CoreError>> + Send;
}
