// src/handlers.rs
use crate::state::{Event, MAX_UPLOAD_BYTES};
use crate::{AppState, catalog, errors::SnapError, models::*, services::ImageCodec};
use actix_multipart::Multipart;
use actix_web::{Error, HttpResponse, web};
use bytes::BytesMut;
use futures_util::TryStreamExt;
use log::info;
use serde::Deserialize;

const INDEX_HTML: &str = include_str!("../static/index.html");
pub const DOWNLOAD_FILENAME: &str = "divine-snap.png";

#[derive(Debug, Deserialize)]
pub struct CustomNameBody {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ClothingBody {
    pub clothing: ClothingStyle,
}

#[derive(Debug, Deserialize)]
pub struct ModeBody {
    pub mode: SelectionMode,
}

#[derive(Debug, Deserialize)]
pub struct FreeformBody {
    pub text: String,
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

pub async fn list_characters() -> HttpResponse {
    HttpResponse::Ok().json(catalog::all())
}

pub async fn get_state(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(data.session.view())
}

pub async fn upload_photo(
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    while let Some(mut field) = payload.try_next().await? {
        let content_disposition = field.content_disposition();
        let Some(filename) = content_disposition.get_filename().map(str::to_string) else {
            continue;
        };

        let content_type = field.content_type().map(|ct| ct.to_string());

        // Anything past the cap is drained, not kept.
        let mut buffer = BytesMut::new();
        while let Some(chunk) = field.try_next().await? {
            if buffer.len() <= MAX_UPLOAD_BYTES {
                buffer.extend_from_slice(&chunk);
            }
        }

        info!("Received photo {} ({} bytes buffered)", filename, buffer.len());
        data.session.dispatch(Event::PhotoChosen(PhotoFile {
            filename,
            content_type,
            data: buffer.freeze(),
        }));

        return Ok(HttpResponse::Ok().json(data.session.view()));
    }

    Err(SnapError::Upload("No file provided".to_string()).into())
}

pub async fn clear_photo(data: web::Data<AppState>) -> HttpResponse {
    data.session.dispatch(Event::ResetAll);
    HttpResponse::Ok().json(data.session.view())
}

pub async fn select_character(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<HttpResponse, SnapError> {
    let id = path.into_inner();
    let character = catalog::find(&id).ok_or(SnapError::UnknownCharacter(id))?;
    data.session.dispatch(Event::CharacterSelected(character));
    Ok(HttpResponse::Ok().json(data.session.view()))
}

pub async fn set_custom_name(
    body: web::Json<CustomNameBody>,
    data: web::Data<AppState>,
) -> HttpResponse {
    data.session.dispatch(Event::CustomNameChanged(body.into_inner().name));
    HttpResponse::Ok().json(data.session.view())
}

pub async fn set_clothing(
    body: web::Json<ClothingBody>,
    data: web::Data<AppState>,
) -> HttpResponse {
    data.session.dispatch(Event::ClothingChanged(body.clothing));
    HttpResponse::Ok().json(data.session.view())
}

pub async fn set_mode(body: web::Json<ModeBody>, data: web::Data<AppState>) -> HttpResponse {
    data.session.dispatch(Event::ModeChanged(body.mode));
    HttpResponse::Ok().json(data.session.view())
}

pub async fn set_freeform(
    body: web::Json<FreeformBody>,
    data: web::Data<AppState>,
) -> HttpResponse {
    data.session.dispatch(Event::FreeformChanged(body.into_inner().text));
    HttpResponse::Ok().json(data.session.view())
}

pub async fn generate(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(data.session.submit().await)
}

pub async fn reset_settings(data: web::Data<AppState>) -> HttpResponse {
    data.session.dispatch(Event::ResetSettings);
    HttpResponse::Ok().json(data.session.view())
}

pub async fn get_photo(data: web::Data<AppState>) -> Result<HttpResponse, SnapError> {
    let photo = data.session.snapshot().photo.ok_or(SnapError::NoPhoto)?;
    let bytes = ImageCodec::decode_payload(&photo.data_uri)?;

    Ok(HttpResponse::Ok()
        .content_type(ImageCodec::media_type(&photo.data_uri))
        .body(bytes))
}

pub async fn get_result(data: web::Data<AppState>) -> Result<HttpResponse, SnapError> {
    let result = data.session.snapshot().result.ok_or(SnapError::NoResult)?;
    let bytes = ImageCodec::decode_payload(&result.image_url)?;

    Ok(HttpResponse::Ok().content_type("image/png").body(bytes))
}

pub async fn download_result(data: web::Data<AppState>) -> Result<HttpResponse, SnapError> {
    let result = data.session.snapshot().result.ok_or(SnapError::NoResult)?;
    let bytes = ImageCodec::decode_payload(&result.image_url)?;

    Ok(HttpResponse::Ok()
        .content_type("image/png")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", DOWNLOAD_FILENAME),
        ))
        .body(bytes))
}
