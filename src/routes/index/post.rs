use crate::domain::PlantingQuery;
use crate::lookup::PlantingLookup;
use crate::page::PageState;
use crate::routes::common::render_page;
use actix_web::{HttpResponse, web};

pub async fn submit_planting_form(
    lookup: web::Data<dyn PlantingLookup>,
    form: web::Form<PlantingQuery>,
) -> HttpResponse {
    let query = form.into_inner();
    if let Err(e) = query.ensure_complete() {
        return HttpResponse::BadRequest().body(e.to_string());
    }

    let mut page = PageState::from_query(query);
    page.submit(lookup.get_ref()).await;

    render_page(&page)
}
