use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use calorielens_core::domain::{
    food_analysis::{
        entities::NutritionAnalysis, ports::NutritionAnalysisService,
        value_objects::{AnalyzeImageInput, ImageSource},
    },
    image::entities::MAX_IMAGE_SIZE,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: NutritionAnalysis,
}

/// Multipart body: one or both image channels.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct AnalyzeFoodImageForm {
    /// Image chosen with the file picker
    #[schema(value_type = Option<String>, format = Binary)]
    upload: Option<Vec<u8>>,
    /// Image taken with the camera
    #[schema(value_type = Option<String>, format = Binary)]
    camera: Option<Vec<u8>>,
}

fn multipart_error(e: MultipartError) -> ApiError {
    error!("Failed to read multipart field: {}", e);
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(e.body_text());
    }
    ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "food-analysis",
    summary = "Estimate nutrition from a food photo",
    description = "Sends the most recently supplied image (file upload or camera capture) to the vision model and returns its answer verbatim, plus a best-effort structured reading.",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 400, description = "Missing or undecodable image", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 502, description = "Vision service failure", body = ApiErrorResponse)
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let mut image: Option<(ImageSource, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let source = match field.name().unwrap_or("") {
            "upload" => ImageSource::Upload,
            "camera" => ImageSource::Camera,
            _ => continue,
        };

        let data = field.bytes().await.map_err(multipart_error)?;

        // Browsers send an empty part for an untouched file input.
        if data.is_empty() {
            continue;
        }

        if data.len() > MAX_IMAGE_SIZE {
            warn!(size = data.len(), "Rejected oversized image");
            return Err(ApiError::PayloadTooLarge(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        // Later parts replace earlier ones: the last image supplied wins.
        image = Some((source, data.to_vec()));
    }

    let (source, image_data) =
        image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .analyze_image(AnalyzeImageInput { source, image_data })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse { data: result }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::multipart::{MultipartForm, Part};
    use calorielens_core::domain::{
        food_analysis::entities::AnalysisKind, prompt::entities::PromptVariant,
    };
    use serde_json::Value;

    use super::*;
    use crate::application::http::{
        server::http_server::MAX_BODY_SIZE,
        test::{MockUpstream, jpeg_photo, png_photo, test_server},
    };

    const APPLE: &str = "Food Name: Apple\nEstimated Calories: 95 kcal";

    fn upload(bytes: Vec<u8>) -> Part {
        Part::bytes(bytes).file_name("meal.png").mime_type("image/png")
    }

    #[tokio::test]
    async fn test_result_text_is_displayed_unmodified() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        let response = server
            .post("/api/analyze")
            .multipart(MultipartForm::new().add_part("upload", upload(png_photo())))
            .await;

        response.assert_status_ok();
        let body: AnalyzeFoodResponse = response.json();
        assert_eq!(body.data.raw_text, APPLE);
        assert_eq!(body.data.kind, AnalysisKind::Unparsed);
        assert_eq!(body.data.source, ImageSource::Upload);
        assert_eq!(body.data.prompt_variant, PromptVariant::Structured);
        assert_eq!(upstream.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_outbound_request_shape() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        server
            .post("/api/analyze")
            .multipart(MultipartForm::new().add_part("upload", upload(png_photo())))
            .await
            .assert_status_ok();

        let calls = upstream.calls();
        assert_eq!(calls.len(), 1);
        let body = &calls[0];

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 250);

        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert!(messages[0]["content"].is_string());
        assert_eq!(messages[1]["role"], "user");

        let parts = messages[1]["content"].as_array().unwrap();
        let texts = parts.iter().filter(|p| p["type"] == "text").count();
        let images: Vec<&Value> = parts.iter().filter(|p| p["type"] == "image_url").collect();
        assert_eq!(texts, 1);
        assert_eq!(images.len(), 1);
        assert!(
            images[0]["image_url"]["url"]
                .as_str()
                .unwrap()
                .starts_with("data:image/jpeg;base64,")
        );
    }

    #[tokio::test]
    async fn test_last_supplied_image_wins() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        let form = MultipartForm::new()
            .add_part("upload", upload(png_photo()))
            .add_part(
                "camera",
                Part::bytes(jpeg_photo())
                    .file_name("capture.jpg")
                    .mime_type("image/jpeg"),
            );

        let response = server.post("/api/analyze").multipart(form).await;

        response.assert_status_ok();
        let body: AnalyzeFoodResponse = response.json();
        assert_eq!(body.data.source, ImageSource::Camera);
        assert_eq!(upstream.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_channel_is_ignored() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        let form = MultipartForm::new()
            .add_part("upload", upload(png_photo()))
            .add_part("camera", Part::bytes(Vec::new()).file_name(""));

        let response = server.post("/api/analyze").multipart(form).await;

        response.assert_status_ok();
        let body: AnalyzeFoodResponse = response.json();
        assert_eq!(body.data.source, ImageSource::Upload);
    }

    #[tokio::test]
    async fn test_invalid_image_sends_nothing_upstream() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        let response = server
            .post("/api/analyze")
            .multipart(
                MultipartForm::new().add_part("upload", upload(b"not an image".to_vec())),
            )
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.code, "E_BAD_REQUEST");
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_image_is_rejected() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        let response = server
            .post("/api/analyze")
            .multipart(MultipartForm::new().add_text("note", "lunch"))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.message, "Missing image field");
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_upstream_is_an_error() {
        let upstream = MockUpstream::rejecting_credential().await;
        let server = test_server(&upstream.base_url);

        let response = server
            .post("/api/analyze")
            .multipart(MultipartForm::new().add_part("upload", upload(png_photo())))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.code, "E_UPSTREAM_UNAUTHORIZED");
        assert!(!body.message.is_empty());
        assert_eq!(upstream.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_oversized_image_is_rejected() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        let response = server
            .post("/api/analyze")
            .multipart(
                MultipartForm::new().add_part("upload", upload(vec![0u8; MAX_IMAGE_SIZE + 1])),
            )
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body: ApiErrorResponse = response.json();
        assert_eq!(body.code, "E_PAYLOAD_TOO_LARGE");
        assert!(upstream.calls().is_empty());
    }

    #[tokio::test]
    async fn test_body_over_the_limit_is_rejected() {
        let upstream = MockUpstream::completing(APPLE).await;
        let server = test_server(&upstream.base_url);

        let response = server
            .post("/api/analyze")
            .multipart(
                MultipartForm::new().add_part("camera", upload(vec![0u8; MAX_BODY_SIZE + 1])),
            )
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(upstream.calls().is_empty());
    }
}
