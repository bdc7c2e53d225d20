/// Crops offered by the page's crop select, in display order.
pub const CROP_OPTIONS: [&str; 5] = ["Corn", "Soybeans", "Wheat", "Tomatoes", "Potatoes"];

/// Ranked crops every lookup starts from.
pub const DEFAULT_TOP_CROPS: [&str; 3] = ["Corn", "Soybeans", "Wheat"];

/// Crop names compare without regard to letter case (`"corn"` == `"Corn"`).
pub fn same_crop(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

pub fn is_default_crop(crop: &str) -> bool {
    DEFAULT_TOP_CROPS.iter().any(|default| same_crop(default, crop))
}
