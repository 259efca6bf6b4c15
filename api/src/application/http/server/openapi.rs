use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc,
    health::{__path_health, health},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CalorieLens API"
    ),
    paths(health),
    nest(
        (path = "/api", api = FoodAnalysisApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.ends_with("/analyze")));
        assert!(paths.iter().any(|p| p.ends_with("/health")));
    }
}
