use crate::config::Config;
use crate::database::DB;
use crate::database::repositories::{FolderRepository, NoteRepository};

/// Shared per-process state, built once at startup and handed to every
/// worker through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteRepository,
    pub folders: FolderRepository,
    pub config: Config,
}

impl AppState {
    pub fn new(db: DB, config: Config) -> Self {
        Self {
            notes: NoteRepository::new(db.clone()),
            folders: FolderRepository::new(db),
            config,
        }
    }
}
