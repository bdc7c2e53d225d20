use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantingInfo {
    /// Human readable planting window.
    /// **Example:** `"Mid-April to Early-May"`
    pub optimal_time: String,

    /// Ranked crop names, best first. Holds no two names that differ only in case.
    pub top_crops: Vec<String>,
}
