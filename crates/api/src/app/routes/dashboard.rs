use std::sync::Arc;

use axum::{extract::Extension, Json};

use tilestock_store::{DashboardSummary, RecordStore};

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn get_summary(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<DashboardSummary>, ApiError> {
    Ok(Json(services.store().summary()?))
}
