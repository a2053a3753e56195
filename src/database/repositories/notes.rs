use chrono::{SubsecRound, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::StoreError;
use crate::database::{models::notes, DB};

/// Fields required to create a note. `id` and `modified` are assigned here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub name: String,
    pub folder_id: i32,
    pub content: String,
}

/// Partial update: only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub name: Option<String>,
    pub folder_id: Option<i32>,
    pub content: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.folder_id.is_none() && self.content.is_none()
    }
}

#[derive(Clone)]
pub struct NoteRepository {
    db: DB,
}

impl NoteRepository {
    pub fn new(db: DB) -> Self {
        Self { db }
    }

    /// All notes, ordered by id.
    pub async fn list(&self) -> Result<Vec<notes::Model>, StoreError> {
        let rows = notes::Entity::find()
            .order_by_asc(notes::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<notes::Model>, StoreError> {
        let note = notes::Entity::find_by_id(id).one(&self.db).await?;
        Ok(note)
    }

    /// Fails with `StoreError::ConstraintViolation` when `folder_id` does not
    /// reference an existing folder.
    pub async fn insert(&self, new_note: NewNote) -> Result<notes::Model, StoreError> {
        let note = notes::ActiveModel {
            name: Set(new_note.name),
            folder_id: Set(new_note.folder_id),
            content: Set(new_note.content),
            modified: Set(Utc::now().trunc_subsecs(3)),
            ..Default::default()
        };

        let created = note.insert(&self.db).await?;
        log::debug!("Inserted note {} into folder {}", created.id, created.folder_id);
        Ok(created)
    }

    /// Returns the number of affected rows; 0 when `id` does not exist.
    pub async fn update(&self, id: i32, patch: NotePatch) -> Result<u64, StoreError> {
        if patch.is_empty() {
            return Ok(0);
        }

        let mut query = notes::Entity::update_many().filter(notes::Column::Id.eq(id));
        if let Some(name) = patch.name {
            query = query.col_expr(notes::Column::Name, Expr::value(name));
        }
        if let Some(folder_id) = patch.folder_id {
            query = query.col_expr(notes::Column::FolderId, Expr::value(folder_id));
        }
        if let Some(content) = patch.content {
            query = query.col_expr(notes::Column::Content, Expr::value(content));
        }

        let result = query.exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    /// Returns the number of affected rows; 0 when `id` does not exist.
    pub async fn delete(&self, id: i32) -> Result<u64, StoreError> {
        let result = notes::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
