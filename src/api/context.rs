use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    database::models::notes,
    errors::AppError,
};

pub const NOTE_NOT_FOUND: &str = "Note doesn't exist";

/// Note addressed by the `{id}` path segment, fetched once before the
/// method-specific handler runs. Extraction fails with 404 when the id is
/// not an integer or no such row exists.
#[derive(Clone, Debug)]
pub struct NoteContext {
    pub id: i32,
    pub note: notes::Model,
}

impl FromRequest for NoteContext {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { resolve_note_context(&req).await })
    }
}

pub fn parse_note_id(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|value| value.trim().parse::<i32>().ok())
}

pub async fn resolve_note_context(req: &HttpRequest) -> Result<NoteContext, AppError> {
    let app_state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        log::error!("AppState is not registered on the application");
        AppError::Internal
    })?;

    let id = parse_note_id(req.match_info().get("id")).ok_or_else(|| {
        log::debug!("Unparseable note id in path {}", req.path());
        AppError::NotFound(NOTE_NOT_FOUND.to_string())
    })?;

    let note = app_state
        .notes
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOTE_NOT_FOUND.to_string()))?;

    Ok(NoteContext { id, note })
}
