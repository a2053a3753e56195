use sea_orm::{EntityTrait, QueryOrder};

use super::StoreError;
use crate::database::{models::folders, DB};

#[derive(Clone)]
pub struct FolderRepository {
    db: DB,
}

impl FolderRepository {
    pub fn new(db: DB) -> Self {
        Self { db }
    }

    /// All folders, ordered by id.
    pub async fn list(&self) -> Result<Vec<folders::Model>, StoreError> {
        let rows = folders::Entity::find()
            .order_by_asc(folders::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}
