use actix_web::{http::header, web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    client::{render_sections, stylesheet_href, theme, SlideshowOptions},
    error::{DeckError, Result},
    logger,
    models::{GenerateRequest, GenerateResponse, RenderRequest},
    server::AppState,
};

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub configured: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResponse {
    pub html: String,
    pub theme_href: String,
    pub options: SlideshowOptions,
}

/// POST /api/generate
///
/// The body is parsed by hand so that a malformed payload is reported as a
/// generation failure rather than the framework's default 400.
pub async fn generate(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let request_id = Uuid::new_v4().to_string();
    logger::with_request_id(request_id, async move {
        let request: GenerateRequest = serde_json::from_slice(&body).map_err(|e| {
            log::warn!("Unreadable generate request body: {}", e);
            DeckError::SerializationError(e.to_string())
        })?;

        let deck = state.generator.generate(request.brief.as_deref()).await?;
        log::info!("Generated deck with {} slides", deck.slides.len());

        Ok(HttpResponse::Ok().json(GenerateResponse { deck }))
    })
    .await
}

/// POST /api/render
pub async fn render(request: web::Json<RenderRequest>) -> HttpResponse {
    let deck = request.into_inner().deck;
    HttpResponse::Ok().json(RenderResponse {
        html: render_sections(&deck),
        theme_href: stylesheet_href(deck.theme.as_str()),
        options: SlideshowOptions::for_ratio(deck.ratio),
    })
}

/// GET /reveal-theme-{name}.css, redirecting to the reveal.js distribution.
pub async fn theme_stylesheet(resource: web::Path<String>) -> HttpResponse {
    match theme::theme_from_resource(&resource) {
        Some(theme) => HttpResponse::Found()
            .insert_header((header::LOCATION, theme::cdn_stylesheet_url(theme)))
            .finish(),
        None => HttpResponse::NotFound().finish(),
    }
}

pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        configured: state.generator.is_configured(),
    })
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

/// Theme stylesheets are matched last, as any single-segment GET.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/api/generate", web::post().to(generate))
        .route("/api/render", web::post().to(render))
        .route("/{resource}", web::get().to(theme_stylesheet));
}
