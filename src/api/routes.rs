// src/api/routes.rs
use actix_web::web;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Browser UI
    cfg.route("/", web::get().to(handlers::pages::index))
        .route("/static/{file}", web::get().to(handlers::pages::static_asset));

    // Generator
    cfg.route("/generate", web::post().to(handlers::generator::generate))
        .route("/download", web::post().to(handlers::download::download));

    // Breach check
    cfg.route("/check_pwned", web::post().to(handlers::pwned::check_pwned));
}
