use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchase record submitted for scoring.
///
/// Amounts, dates and times are carried as the caller sent them. They are only
/// interpreted when points are computed, so a malformed `total` does not reject
/// the whole receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    #[schema(example = "M&M Corner Market")]
    pub retailer: String,
    /// Purchase date as `YYYY-MM-DD`
    #[schema(example = "2022-03-20")]
    pub purchase_date: String,
    /// Purchase time as 24-hour `HH:MM`
    #[schema(example = "14:33")]
    pub purchase_time: String,
    pub items: Vec<Item>,
    #[schema(example = "9.00")]
    pub total: String,
}

/// A single line entry on a receipt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    #[schema(example = "Gatorade")]
    pub short_description: String,
    #[schema(example = "2.25")]
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}
