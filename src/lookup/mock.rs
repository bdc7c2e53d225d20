use super::{Delay, PlantingLookup};
use crate::domain::{DEFAULT_TOP_CROPS, PlantingInfo, PlantingQuery, is_default_crop, same_crop};
use crate::error::LookupError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_OPTIMAL_TIME: &str = "Mid-April to Early-May";

/// Canned recommendation for `crop`.
///
/// A crop outside the defaults is moved to the front of the ranking. The
/// ranking is not cut back to three afterwards.
pub fn recommend(crop: &str) -> PlantingInfo {
    let mut top_crops: Vec<String> = DEFAULT_TOP_CROPS.iter().map(|c| c.to_string()).collect();

    if !is_default_crop(crop) {
        top_crops.retain(|existing| !same_crop(existing, crop));
        top_crops.insert(0, crop.to_string());
    }

    PlantingInfo {
        optimal_time: DEFAULT_OPTIMAL_TIME.to_string(),
        top_crops,
    }
}

/// Stands in for a remote planting service: waits, then answers with [`recommend`].
pub struct MockPlantingLookup {
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl MockPlantingLookup {
    pub fn new(delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self { delay, latency }
    }
}

#[async_trait]
impl PlantingLookup for MockPlantingLookup {
    async fn fetch_planting_info(
        &self,
        query: &PlantingQuery,
    ) -> Result<PlantingInfo, LookupError> {
        // postal code is accepted but plays no part in the answer
        self.delay.wait(self.latency).await;
        tracing::debug!(
            postal_code = %query.postal_code,
            crop = %query.crop,
            "Answering planting lookup from mock data"
        );
        Ok(recommend(&query.crop))
    }
}
