use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, routing::get};
use calorielens_core::{
    application::create_service, domain::common::CalorieLensConfig,
    domain::image::entities::MAX_IMAGE_SIZE,
};
use tracing::info_span;
use utoipa::OpenApi;

use crate::{
    application::http::{
        food_analysis::router::food_analysis_routes,
        health::health_routes,
        home::router::home_routes,
        server::{app_state::AppState, openapi::ApiDoc},
    },
    args::Args,
};

// Room for both input channels plus multipart framing.
pub(crate) const MAX_BODY_SIZE: usize = 2 * MAX_IMAGE_SIZE + 64 * 1024;

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = CalorieLensConfig::from(args.as_ref().clone());
    let service = create_service(config)?;

    Ok(AppState::new(service))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let router = Router::new()
        .merge(home_routes())
        .merge(health_routes())
        .merge(food_analysis_routes())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(trace_layer)
        .with_state(state);

    Ok(router)
}
