use std::sync::Arc;

use axum::{extract::Extension, routing::post, Json, Router};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(describe_tile))
}

/// Always 200: generated text and fallback text look the same to the caller.
pub async fn describe_tile(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DescribeRequest>,
) -> Json<dto::DescriptionResponse> {
    let description = services.describe(&body.name).await;
    Json(dto::DescriptionResponse { description })
}
