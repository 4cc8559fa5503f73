use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use storage::{
    ReceiptStore,
    dto::receipt::{PointsResponse, ProcessReceiptResponse},
    models::Receipt,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/receipts/process",
    request_body = Receipt,
    responses(
        (status = 200, description = "Receipt scored and stored", body = ProcessReceiptResponse),
        (status = 400, description = "The receipt is invalid")
    ),
    tag = "receipts"
)]
pub async fn process_receipt(
    State(store): State<ReceiptStore>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(receipt) = payload?;

    let response = services::process_receipt(&store, receipt);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/receipts/{id}/points",
    params(
        ("id" = String, Path, description = "Receipt identifier returned by /receipts/process")
    ),
    responses(
        (status = 200, description = "Points awarded to the receipt", body = PointsResponse),
        (status = 400, description = "Invalid path"),
        (status = 404, description = "No receipt found for that ID")
    ),
    tag = "receipts"
)]
pub async fn get_points(
    State(store): State<ReceiptStore>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = path?;
    let id = receipt_id(&id)?;

    let response = services::get_points(&store, id)?;

    Ok(Json(response).into_response())
}

fn receipt_id(raw: &str) -> Result<&str, WebError> {
    if raw.trim().is_empty() {
        return Err(WebError::InvalidPath("missing receipt id".to_string()));
    }
    Ok(raw)
}
