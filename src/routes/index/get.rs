use crate::page::PageState;
use crate::routes::common::render_page;
use actix_web::HttpResponse;

pub async fn render_index() -> HttpResponse {
    render_page(&PageState::default())
}
