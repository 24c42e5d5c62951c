// src/api/mod.rs
use actix_web::{middleware::Logger, web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};
use crate::core::config::Config;
use crate::pwned::{PwnedChecker, PwnedError};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate,
        crate::api::handlers::download::download,

        // Breach check endpoints
        crate::api::handlers::pwned::check_pwned
    ),
    components(
        schemas(
            crate::api::types::ErrorResponse,
            crate::api::types::GenerateRequest,
            crate::api::types::GenerateResponse,
            crate::api::types::CheckPwnedRequest,
            crate::api::types::DownloadRequest,
            crate::export::ExportEntry,
            crate::models::PasswordResult,
            crate::models::OutputFormat,
            crate::models::PwnedReport,
            crate::models::PwnedStatus
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and download endpoints"),
        (name = "Breach check", description = "Have I Been Pwned lookups")
    ),
    info(
        title = "passforge API",
        version = "0.1.0",
        description = "Password generator with breach checking",
        license(name = "MIT")
    )
)]
struct ApiDoc;

/// Shared state handed to every handler.
pub struct AppState {
    pub checker: PwnedChecker,
    pub max_password_amount: usize,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, PwnedError> {
        Ok(Self {
            checker: PwnedChecker::new(&config.hibp_api_url, config.hibp_timeout)?,
            max_password_amount: config.max_password_amount,
        })
    }

    /// State whose breach checker points at a closed local port.
    #[cfg(test)]
    pub fn for_tests(max_password_amount: usize) -> Self {
        let checker = PwnedChecker::new("http://127.0.0.1:9", std::time::Duration::from_secs(2))
            .expect("test checker");
        Self {
            checker,
            max_password_amount,
        }
    }
}

pub async fn start_server(config: &Config) -> std::io::Result<()> {
    log::info!("Starting passforge on {}:{}", config.web_address, config.web_port);

    let state = AppState::from_config(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let state = web::Data::new(state);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::new("%a \"%r\" %s %b %Dms"))
            .app_data(state.clone())
            .app_data(utils::json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_all_endpoints() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/generate"));
        assert!(paths.iter().any(|p| p.as_str() == "/download"));
        assert!(paths.iter().any(|p| p.as_str() == "/check_pwned"));
    }
}
