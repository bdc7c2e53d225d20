mod render_page;

pub use render_page::render_page;
