use crate::domain::{
    food_analysis::value_objects::{
        DEFAULT_IMAGE_MIME, MAX_OUTPUT_TOKENS, MimeLabel, VisionRequest,
    },
    image::entities::EncodedPayload,
    prompt::entities::PromptSpec,
};

/// Builds the single outbound request for one image.
pub fn build_vision_request(
    model: &str,
    prompt: &PromptSpec,
    payload: &EncodedPayload,
    mime_label: MimeLabel,
) -> VisionRequest {
    let mime_type = match mime_label {
        MimeLabel::Fixed => DEFAULT_IMAGE_MIME,
        MimeLabel::Detected => payload.content_type(),
    };

    VisionRequest {
        model: model.to_string(),
        system_instruction: prompt.system_instruction.clone(),
        user_instruction: prompt.user_instruction.clone(),
        image_url: payload.data_uri(mime_type),
        max_output_tokens: MAX_OUTPUT_TOKENS,
    }
}
