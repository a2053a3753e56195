use actix_web::{delete, get, http::header, patch, post, web, HttpRequest, HttpResponse};

use crate::{
    api::{
        context::NoteContext,
        helpers::extracted_body,
        validation::parse_json_body,
    },
    app_state::AppState,
    errors::AppError,
};

use super::{
    functions::{note_location, serialize_note, validate_new_note, validate_note_patch},
    structures::{CreateNoteDto, NoteResponse, UpdateNoteDto},
};

#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "Notes",
    responses(
        (status = 200, description = "List all notes", body = [NoteResponse])
    )
)]
#[get("")]
pub async fn get_notes(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let notes = app_state.notes.list().await?;
    let body: Vec<NoteResponse> = notes.into_iter().map(serialize_note).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "Notes",
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Note created", body = NoteResponse,
            headers(("Location" = String, description = "Path of the new note"))),
        (status = 400, description = "Missing field or malformed body"),
        (status = 413, description = "Body exceeds the configured limit"),
        (status = 500, description = "Store failure, including unknown folderId")
    )
)]
#[post("")]
pub async fn create_note(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let body = extracted_body(body)?;
    let dto: CreateNoteDto = parse_json_body(&body)?;
    let new_note = validate_new_note(dto)?;

    let created = app_state.notes.insert(new_note).await?;
    log::info!("Created note {} in folder {}", created.id, created.folder_id);

    let location = note_location(req.path(), created.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(serialize_note(created)))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    tag = "Notes",
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note doesn't exist")
    )
)]
#[get("/{id}")]
pub async fn get_note(ctx: NoteContext) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(serialize_note(ctx.note)))
}

#[utoipa::path(
    patch,
    path = "/api/notes/{id}",
    tag = "Notes",
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    request_body = UpdateNoteDto,
    responses(
        (status = 204, description = "Note updated"),
        (status = 400, description = "No recognised field in body"),
        (status = 413, description = "Body exceeds the configured limit"),
        (status = 404, description = "Note doesn't exist")
    )
)]
#[patch("/{id}")]
pub async fn update_note(
    app_state: web::Data<AppState>,
    ctx: NoteContext,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let body = extracted_body(body)?;
    let dto: UpdateNoteDto = parse_json_body(&body)?;
    let patch = validate_note_patch(dto)?;

    let affected = app_state.notes.update(ctx.id, patch).await?;
    if affected == 0 {
        log::warn!("Note {} disappeared before it could be updated", ctx.id);
    } else {
        log::info!("Updated note {}", ctx.id);
    }

    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "Notes",
    params(
        ("id" = i32, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note doesn't exist")
    )
)]
#[delete("/{id}")]
pub async fn delete_note(
    app_state: web::Data<AppState>,
    ctx: NoteContext,
) -> Result<HttpResponse, AppError> {
    let affected = app_state.notes.delete(ctx.id).await?;
    if affected == 0 {
        log::warn!("Note {} was already gone at delete time", ctx.id);
    } else {
        log::info!("Deleted note {}", ctx.id);
    }

    Ok(HttpResponse::NoContent().finish())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .service(get_notes)
            .service(create_note)
            .service(get_note)
            .service(update_note)
            .service(delete_note),
    );
}
