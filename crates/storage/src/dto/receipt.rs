use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response returned after a receipt has been processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProcessReceiptResponse {
    #[schema(example = "7fb1377b-b223-49d9-a31a-5a02701dd310")]
    pub id: String,
}

/// Points awarded to a stored receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    #[schema(example = 109)]
    pub points: u64,
}
