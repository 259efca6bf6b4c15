use tracing::{Span, debug, error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    food_analysis::{
        entities::NutritionAnalysis,
        helpers::build_vision_request,
        parser::parse_estimate,
        ports::{NutritionAnalysisService, VisionClient},
        value_objects::AnalyzeImageInput,
    },
    image::{entities::SourceImage, services::normalize},
    prompt::entities::PromptSpec,
};

impl<V> NutritionAnalysisService for Service<V>
where
    V: VisionClient,
{
    #[instrument(
        skip(self, input),
        fields(request_id = tracing::field::Empty, source = ?input.source)
    )]
    async fn analyze_image(
        &self,
        input: AnalyzeImageInput,
    ) -> Result<NutritionAnalysis, CoreError> {
        let request_id = generate_uuid_v7();
        Span::current().record("request_id", tracing::field::display(request_id));

        // 1. Decode; nothing goes upstream for an unreadable image
        let image = SourceImage::from_bytes(&input.image_data).map_err(|e| {
            error!("Rejected uploaded image: {}", e);
            e
        })?;
        debug!(
            format = ?image.format(),
            width = image.dimensions().0,
            height = image.dimensions().1,
            size_bytes = image.size_bytes(),
            "decoded image"
        );

        // 2. Encode payload
        let payload = normalize(&image)?;

        // 3. Build the request
        let prompt = PromptSpec::for_variant(self.analysis.prompt_variant);
        let request =
            build_vision_request(&self.model, &prompt, &payload, self.analysis.mime_label);

        // 4. Call the model, exactly once
        info!(model = %self.model, variant = %prompt.variant, "requesting nutrition estimate");
        let raw_text = self.vision_client.complete(request).await?;

        // 5. Read the answer without touching it
        let kind = parse_estimate(&raw_text, prompt.variant);
        let analysis = NutritionAnalysis::new(
            request_id,
            input.source,
            self.model.clone(),
            prompt.variant,
            raw_text,
            kind,
        );

        info!(structured = analysis.is_structured(), "nutrition estimate received");

        Ok(analysis)
    }
}
