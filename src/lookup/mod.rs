mod delay;
mod mock;

pub use delay::{Delay, Immediate, TokioDelay};
pub use mock::{DEFAULT_OPTIMAL_TIME, MockPlantingLookup, recommend};

use crate::domain::{PlantingInfo, PlantingQuery};
use crate::error::LookupError;
use async_trait::async_trait;

/// Source of planting recommendations for a postal code and crop.
#[async_trait]
pub trait PlantingLookup: Send + Sync {
    async fn fetch_planting_info(
        &self,
        query: &PlantingQuery,
    ) -> Result<PlantingInfo, LookupError>;
}
