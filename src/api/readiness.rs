use actix_web::http::header::{CacheControl, CacheDirective, ContentType};
use actix_web::{web, Error, HttpRequest, HttpResponse, Resource};
use serde_json::Value;

use crate::models::{Readiness, ReadinessCheck};

pub async fn readiness(
    req: HttpRequest,
    check: web::Data<ReadinessCheck>,
) -> Result<HttpResponse, Error> {
    let path = req.path().to_string();

    let outcome = match check.run(req).await {
        Ok(outcome) => outcome,
        Err(e) => {
            log::warn!("Readiness check at {} failed: {}", path, e);
            return Err(e);
        }
    };

    if !outcome.is_ready() {
        log::debug!("Readiness check at {} reported not ready", path);
    }

    Ok(render(outcome))
}

/// 就绪 → 200，未就绪 → 500；字符串按纯文本输出，其余按 JSON 输出
pub(crate) fn render(outcome: Readiness) -> HttpResponse {
    let (mut builder, payload) = match outcome {
        Readiness::Ready(value) => (HttpResponse::Ok(), Some(value)),
        Readiness::NotReady(value) => (HttpResponse::InternalServerError(), value),
    };

    builder.insert_header(CacheControl(vec![CacheDirective::NoCache]));

    match payload {
        None => builder.finish(),
        Some(Value::String(text)) => builder.content_type(ContentType::plaintext()).body(text),
        Some(value) => builder.json(value),
    }
}

pub(crate) fn resource(path: &str, check: ReadinessCheck) -> Resource {
    web::resource(path)
        .app_data(web::Data::new(check))
        .route(web::get().to(readiness))
        .route(web::head().to(readiness))
}
