use sea_orm::{ConnectionTrait, DbErr, EntityName, EntityTrait, Schema};

use super::models::{folders, notes};

/// Creates the `folders` and `notes` tables if they are missing.
/// Folders go first: `notes.folder_id` references them.
pub async fn create_schema<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    create_table(db, folders::Entity).await?;
    create_table(db, notes::Entity).await?;
    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    log::debug!("Ensuring table {}", entity.table_name());

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    Ok(())
}
