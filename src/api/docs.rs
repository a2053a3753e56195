use utoipa::OpenApi;

use crate::{
    api::{folders, notes},
    database::models::folders as folder_models,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Notes
        notes::get_notes,
        notes::create_note,
        notes::get_note,
        notes::update_note,
        notes::delete_note,
        // Folders
        folders::get_folders,
    ),
    components(
        schemas(
            folder_models::Model, // Folder
            notes::CreateNoteDto,
            notes::UpdateNoteDto,
            notes::NoteResponse,
        )
    ),
    tags(
        (name = "Notes", description = "Note CRUD endpoints"),
        (name = "Folders", description = "Read-only folder listing")
    )
)]
pub struct ApiDoc;
