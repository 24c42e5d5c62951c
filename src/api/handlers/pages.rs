// src/api/handlers/pages.rs

use actix_web::{web, HttpResponse, Responder};

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/script.js");
const STYLE_CSS: &str = include_str!("../../../static/style.css");

/// Main page with the generator and breach-check forms.
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Browser assets bundled into the binary.
pub async fn static_asset(path: web::Path<String>) -> impl Responder {
    let (body, content_type) = match path.as_str() {
        "script.js" => (SCRIPT_JS, "application/javascript; charset=utf-8"),
        "style.css" => (STYLE_CSS, "text/css; charset=utf-8"),
        _ => return HttpResponse::NotFound().finish(),
    };

    HttpResponse::Ok().content_type(content_type).body(body)
}
