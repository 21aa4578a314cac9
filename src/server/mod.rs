//! HTTP surface: the generate endpoint, the render helper used by the
//! browser shell, theme stylesheets and health.

pub mod error;
pub mod routes;

use actix_web::{middleware, web, App, HttpServer};
use std::io;

use crate::{config::Config, generator::DeckGenerator};

pub use routes::configure;

#[derive(Clone)]
pub struct AppState {
    pub generator: DeckGenerator,
}

impl AppState {
    pub fn new(generator: DeckGenerator) -> Self {
        Self { generator }
    }

    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        Ok(Self::new(DeckGenerator::from_config(config)?))
    }
}

pub async fn run(config: Config) -> io::Result<()> {
    let state = AppState::from_config(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::new("%r %s %Dms"))
            .configure(configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
