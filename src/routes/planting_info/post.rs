use crate::domain::PlantingQuery;
use crate::lookup::PlantingLookup;
use actix_web::{HttpResponse, web};

pub async fn fetch_planting_info(
    lookup: web::Data<dyn PlantingLookup>,
    query: web::Json<PlantingQuery>,
) -> HttpResponse {
    if let Err(e) = query.ensure_complete() {
        return HttpResponse::BadRequest().body(e.to_string());
    }

    match lookup.fetch_planting_info(&query).await {
        Ok(info) => HttpResponse::Ok().json(info),
        Err(e) => {
            tracing::error!(error = %e, crop = %query.crop, "Error fetching planting info");
            HttpResponse::InternalServerError()
                .body("Error fetching planting info. ".to_owned() + &e.to_string())
        }
    }
}
