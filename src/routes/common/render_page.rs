use crate::page::PageState;
use actix_web::HttpResponse;
use askama_actix::TemplateToResponse;

pub fn render_page(page: &PageState) -> HttpResponse {
    page.template().to_response()
}
