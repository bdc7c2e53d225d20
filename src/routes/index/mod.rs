mod get;
mod post;

pub use get::render_index;
pub use post::submit_planting_form;
