//! JSON API handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::state::AppState;
use crate::domain::{
    ApiResponse, ConfigUpdate, ConfigUpdateRequest, FormSnapshot, IdsResponse, RawField,
    SpecificRequest,
};
use crate::error::Result;

type JsonBody<T> = std::result::Result<Json<T>, JsonRejection>;

/// Current form state.
pub async fn get_form(State(state): State<AppState>) -> Json<ApiResponse<FormSnapshot>> {
    Json(ApiResponse::success(state.generator.snapshot()))
}

/// Edit configuration fields. Invalid numeric values are ignored.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON.
pub async fn update_config(
    State(state): State<AppState>,
    body: JsonBody<ConfigUpdateRequest>,
) -> Result<Json<ApiResponse<FormSnapshot>>> {
    let Json(request) = body?;
    let snapshot = state
        .generator
        .update_config(&ConfigUpdate::from(request));
    Ok(Json(ApiResponse::success(snapshot)))
}

/// Generate one sequential identifier.
///
/// # Errors
///
/// Returns an error if the counter cannot advance.
pub async fn generate_single(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<IdsResponse>>> {
    let id = state.generator.generate_single()?;
    Ok(Json(ApiResponse::success(IdsResponse::new(vec![id]))))
}

/// Generate a batch of the configured size.
///
/// # Errors
///
/// Returns an error if the counter cannot advance.
pub async fn generate_batch(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<IdsResponse>>> {
    let ids = state.generator.generate_batch()?;
    Ok(Json(ApiResponse::success(IdsResponse::new(ids))))
}

/// Generate the identifier for a given number. Unparseable input yields no IDs.
///
/// # Errors
///
/// Returns an error if the body is not valid JSON.
pub async fn generate_specific(
    State(state): State<AppState>,
    body: JsonBody<SpecificRequest>,
) -> Result<Json<ApiResponse<IdsResponse>>> {
    let Json(request) = body?;
    let ids = state
        .generator
        .generate_specific(&RawField::into_text(request.number))
        .into_iter()
        .collect();
    Ok(Json(ApiResponse::success(IdsResponse::new(ids))))
}

/// Move the counter back to the start number.
pub async fn reset_counter(State(state): State<AppState>) -> Json<ApiResponse<FormSnapshot>> {
    Json(ApiResponse::success(state.generator.reset_counter()))
}

/// All generated identifiers.
pub async fn list_ids(State(state): State<AppState>) -> Json<ApiResponse<IdsResponse>> {
    Json(ApiResponse::success(IdsResponse::new(state.generator.ids())))
}

/// Empty the log.
pub async fn clear_ids(State(state): State<AppState>) -> Json<ApiResponse<FormSnapshot>> {
    Json(ApiResponse::success(state.generator.clear_log()))
}
