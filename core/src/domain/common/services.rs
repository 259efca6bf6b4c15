use crate::domain::{common::AnalysisConfig, food_analysis::ports::VisionClient};

/// Application service, built once at startup and shared by every request.
#[derive(Clone, Debug)]
pub struct Service<V>
where
    V: VisionClient,
{
    pub(crate) vision_client: V,
    pub(crate) model: String,
    pub(crate) analysis: AnalysisConfig,
}

impl<V> Service<V>
where
    V: VisionClient,
{
    pub fn new(vision_client: V, model: String, analysis: AnalysisConfig) -> Self {
        Self {
            vision_client,
            model,
            analysis,
        }
    }
}
