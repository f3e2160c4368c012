use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{DealRequest, DealResponse},
};

async fn submit_deal(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<DealRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<DealResponse>)> {
    let path = uri.path();
    let Json(request) = payload.map_err(|e| ApiError::from(e).at_path(path))?;
    let new_deal = request
        .into_new_deal()
        .map_err(|fields| ApiError::Validation(fields).at_path(path))?;

    let deal = state
        .deal_service
        .submit_deal(new_deal)
        .await
        .map_err(|e| ApiError::from(e).at_path(path))?;
    Ok((StatusCode::CREATED, Json(DealResponse::from(deal))))
}

async fn get_deal(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> ApiResult<Json<DealResponse>> {
    let deal = state
        .deal_service
        .get_deal(&id)
        .map_err(|e| ApiError::from(e).at_path(uri.path()))?;
    Ok(Json(DealResponse::from(deal)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/deals", post(submit_deal))
        .route("/deals/{id}", get(get_deal))
}
