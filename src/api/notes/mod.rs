pub mod functions;
pub mod handlers;
pub mod structures;

pub use handlers::{
    __path_create_note, __path_delete_note, __path_get_note, __path_get_notes,
    __path_update_note, create_note, delete_note, get_note, get_notes, init_routes,
    update_note,
};

pub use structures::{CreateNoteDto, NoteResponse, UpdateNoteDto};
