use axum::{
    Router,
    routing::{get, post},
};
use storage::ReceiptStore;

use super::handlers::{get_points, process_receipt};

pub fn routes() -> Router<ReceiptStore> {
    Router::new()
        .route("/process", post(process_receipt))
        .route("/:id/points", get(get_points))
}
