mod post;

pub use post::fetch_planting_info;
