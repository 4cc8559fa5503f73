use storage::{
    ReceiptStore,
    dto::receipt::{PointsResponse, ProcessReceiptResponse},
    error::Result,
    models::Receipt,
    services::points,
};

/// Score and store a receipt
pub fn process_receipt(store: &ReceiptStore, receipt: Receipt) -> ProcessReceiptResponse {
    let id = points::process_receipt(store, receipt);
    ProcessReceiptResponse { id }
}

/// Get the points stored for a receipt
pub fn get_points(store: &ReceiptStore, id: &str) -> Result<PointsResponse> {
    let points = points::lookup_points(store, id).inspect_err(|_| {
        tracing::warn!(%id, "Receipt not found");
    })?;

    Ok(PointsResponse { points })
}
