use actix_web::http::header::{CacheControl, CacheDirective, ContentType};
use actix_web::{web, HttpResponse, Resource};

pub async fn liveness() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoCache]))
        .content_type(ContentType::plaintext())
        .body("OK")
}

pub(crate) fn resource(path: &str) -> Resource {
    web::resource(path)
        .route(web::get().to(liveness))
        .route(web::head().to(liveness))
}
