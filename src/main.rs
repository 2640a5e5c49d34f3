// src/main.rs
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use log::info;
use std::sync::Arc;

mod catalog;
mod config;
mod errors;
mod handlers;
mod models;
mod prompt;
mod services;
mod session;
mod state;

use crate::config::Config;
use crate::handlers::{
    clear_photo, download_result, generate, get_photo, get_result, get_state, index,
    list_characters, reset_settings, select_character, set_clothing, set_custom_name,
    set_freeform, set_mode, upload_photo,
};
use crate::services::GeminiService;
use crate::session::StudioSession;

#[derive(Clone)]
pub struct AppState {
    session: Arc<StudioSession>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route("/characters", web::get().to(list_characters))
                .route("/state", web::get().to(get_state))
                .route("/photo", web::get().to(get_photo))
                .route("/photo", web::post().to(upload_photo))
                .route("/photo", web::delete().to(clear_photo))
                .route(
                    "/selection/character/{id}",
                    web::put().to(select_character),
                )
                .route("/selection/custom-name", web::put().to(set_custom_name))
                .route("/selection/clothing", web::put().to(set_clothing))
                .route("/mode", web::put().to(set_mode))
                .route("/freeform", web::put().to(set_freeform))
                .route("/generate", web::post().to(generate))
                .route("/reset", web::post().to(reset_settings))
                .route("/result", web::get().to(get_result))
                .route("/result/download", web::get().to(download_result)),
        );
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting DivineSnap...");

    let config = Config::from_env()?;
    let generator = Arc::new(GeminiService::new(&config)?);
    info!(
        "Using model {} (timeout: {:?})",
        config.gemini_model, config.generation_timeout
    );

    let app_state = AppState {
        session: Arc::new(StudioSession::new(generator)),
    };

    info!("Serving form on http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "divine-snap",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
