use crate::{
    api::validation::{require_field, sanitize_text},
    database::{
        models::notes,
        repositories::{NewNote, NotePatch},
    },
    errors::AppError,
};

use super::structures::{CreateNoteDto, NoteResponse, UpdateNoteDto};

pub const EMPTY_PATCH_MESSAGE: &str =
    "Request body must contain either 'name', 'folderId' or 'content'";

/// Maps a stored row to its API representation. `id`, `modified` and
/// `folderId` are copied; `name` and `content` are sanitized.
pub fn serialize_note(note: notes::Model) -> NoteResponse {
    NoteResponse {
        id: note.id,
        name: sanitize_text(&note.name),
        modified: note.modified,
        folder_id: note.folder_id,
        content: sanitize_text(&note.content),
    }
}

/// Checks `name`, `folderId`, `content` in that order and reports the first
/// one that is missing or null.
pub fn validate_new_note(dto: CreateNoteDto) -> Result<NewNote, AppError> {
    let name = require_field(dto.name, "name")?;
    let folder_id = require_field(dto.folder_id, "folderId")?;
    let content = require_field(dto.content, "content")?;

    Ok(NewNote {
        name,
        folder_id,
        content,
    })
}

/// A field counts as supplied when present and not null; empty strings and
/// zero are values like any other.
pub fn validate_note_patch(dto: UpdateNoteDto) -> Result<NotePatch, AppError> {
    let patch = NotePatch {
        name: dto.name,
        folder_id: dto.folder_id,
        content: dto.content,
    };

    if patch.is_empty() {
        return Err(AppError::InvalidInput(EMPTY_PATCH_MESSAGE.to_string()));
    }

    Ok(patch)
}

/// `<collection-path>/<id>`, e.g. `/api/notes/7`.
pub fn note_location(collection_path: &str, id: i32) -> String {
    format!("{}/{}", collection_path.trim_end_matches('/'), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn stored_note(name: &str, content: &str) -> notes::Model {
        notes::Model {
            id: 9,
            name: name.to_string(),
            modified: Utc.with_ymd_and_hms(2029, 1, 22, 16, 28, 32).unwrap(),
            folder_id: 2,
            content: content.to_string(),
        }
    }

    fn full_dto() -> CreateNoteDto {
        CreateNoteDto {
            name: Some("Test new note".into()),
            folder_id: Some(1),
            content: Some("Test new note content".into()),
        }
    }

    #[test]
    fn serialize_copies_ids_and_timestamp() {
        let note = stored_note("Plain", "Just text");
        let modified = note.modified;
        let response = serialize_note(note);
        assert_eq!(response.id, 9);
        assert_eq!(response.folder_id, 2);
        assert_eq!(response.modified, modified);
        assert_eq!(response.name, "Plain");
        assert_eq!(response.content, "Just text");
    }

    #[test]
    fn serialize_strips_active_markup() {
        let response = serialize_note(stored_note(
            r#"Naughty <script>alert("xss");</script>"#,
            r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">"#,
        ));
        assert_eq!(
            response.name,
            r#"Naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
        assert!(!response.content.contains("<img"));
        assert!(!response.content.contains('<'));
    }

    #[test]
    fn new_note_reports_first_missing_field() {
        let cases = [
            (CreateNoteDto { name: None, ..full_dto() }, "name"),
            (CreateNoteDto { folder_id: None, ..full_dto() }, "folderId"),
            (CreateNoteDto { content: None, ..full_dto() }, "content"),
            (CreateNoteDto::default(), "name"),
        ];

        for (dto, field) in cases {
            let err = validate_new_note(dto).unwrap_err();
            assert_eq!(err.to_string(), format!("Missing '{}' in request body", field));
        }
    }

    #[test]
    fn new_note_accepts_empty_strings() {
        let dto = CreateNoteDto {
            content: Some(String::new()),
            ..full_dto()
        };
        let new_note = validate_new_note(dto).unwrap();
        assert_eq!(new_note.content, "");
        assert_eq!(new_note.folder_id, 1);
    }

    #[test]
    fn patch_requires_at_least_one_field() {
        let err = validate_note_patch(UpdateNoteDto::default()).unwrap_err();
        assert_eq!(err.to_string(), EMPTY_PATCH_MESSAGE);

        let patch = validate_note_patch(UpdateNoteDto {
            folder_id: Some(0),
            ..UpdateNoteDto::default()
        })
        .unwrap();
        assert_eq!(patch.folder_id, Some(0));
        assert!(patch.name.is_none());
    }

    #[test]
    fn location_joins_collection_and_id() {
        assert_eq!(note_location("/api/notes", 7), "/api/notes/7");
        assert_eq!(note_location("/api/notes/", 7), "/api/notes/7");
    }
}
