#![allow(dead_code)]

use chrono::{DateTime, Utc};
use noteful::{
    app_state::AppState,
    config::Config,
    database::{
        DB, connect_from_url,
        models::{folders, notes},
        schema::create_schema,
    },
};
use sea_orm::{EntityTrait, Set};

/// Builds the full application around `$state`, the same way `main` does
/// minus CORS and Swagger.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(actix_web::middleware::NormalizePath::trim())
                .app_data(actix_web::web::Data::new($state.clone()))
                .app_data(noteful::api::helpers::payload_config(&$state.config))
                .configure(noteful::api::init_routes)
                .default_service(actix_web::web::to(
                    noteful::api::helpers::route_not_found,
                )),
        )
        .await
    };
}
pub(crate) use init_app;

/// Application state plus a direct handle for arranging fixtures.
pub struct TestStore {
    pub state: AppState,
    pub db: DB,
}

pub async fn empty_store() -> TestStore {
    store_with_config(Config::default()).await
}

pub async fn store_with_config(config: Config) -> TestStore {
    let db = connect_from_url("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    create_schema(&db).await.expect("schema");
    TestStore {
        state: AppState::new(db.clone(), config),
        db,
    }
}

pub async fn seeded_store() -> TestStore {
    seeded_store_with_config(Config::default()).await
}

pub async fn seeded_store_with_config(config: Config) -> TestStore {
    let store = store_with_config(config).await;
    seed_folders(&store.db).await;
    seed_notes(&store.db).await;
    store
}

pub fn make_folders() -> Vec<folders::Model> {
    ["Important", "Super", "Spangley"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| folders::Model {
            id: i as i32 + 1,
            name: name.to_string(),
        })
        .collect()
}

pub fn make_notes() -> Vec<notes::Model> {
    [
        ("2029-01-22T16:28:32.615Z", 3),
        ("2029-01-25T16:28:32.615Z", 3),
        ("2029-01-26T16:28:32.615Z", 1),
        ("2029-01-27T16:28:32.615Z", 2),
        ("2029-01-28T16:28:32.615Z", 1),
        ("2029-01-30T16:28:32.615Z", 2),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (modified, folder_id))| {
        let id = i as i32 + 1;
        notes::Model {
            id,
            name: format!("Note {}", id),
            modified: modified.parse::<DateTime<Utc>>().expect("fixture timestamp"),
            folder_id,
            content: format!("Note {} content", id),
        }
    })
    .collect()
}

pub async fn seed_notes(db: &DB) {
    let rows = make_notes().into_iter().map(|note| notes::ActiveModel {
        id: Set(note.id),
        name: Set(note.name),
        modified: Set(note.modified),
        folder_id: Set(note.folder_id),
        content: Set(note.content),
    });
    notes::Entity::insert_many(rows)
        .exec(db)
        .await
        .expect("insert notes");
}

pub async fn seed_folders(db: &DB) {
    let rows = make_folders().into_iter().map(|folder| folders::ActiveModel {
        id: Set(folder.id),
        name: Set(folder.name),
    });
    folders::Entity::insert_many(rows)
        .exec(db)
        .await
        .expect("insert folders");
}
