mod common;
mod health_check;
mod index;
mod planting_info;

pub use health_check::health_check;
pub use index::{render_index, submit_planting_form};
pub use planting_info::fetch_planting_info;
