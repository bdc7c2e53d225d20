mod crop;
mod planting_info;
mod planting_query;

pub use crop::{CROP_OPTIONS, DEFAULT_TOP_CROPS, is_default_crop, same_crop};
pub use planting_info::PlantingInfo;
pub use planting_query::PlantingQuery;
