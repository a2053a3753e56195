mod common;

use actix_web::{http::StatusCode, test};
use noteful::database::models::folders;
use serde_json::{Value, json};

use common::{empty_store, init_app, make_folders, seed_folders};

#[actix_web::test]
async fn get_folders_on_empty_store_returns_empty_list() {
    let store = empty_store().await;
    let app = init_app!(store.state);

    let req = test::TestRequest::get().uri("/api/folders").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn get_folders_returns_every_folder() {
    let store = empty_store().await;
    seed_folders(&store.db).await;
    let app = init_app!(store.state);

    let req = test::TestRequest::get().uri("/api/folders").to_request();
    let body: Vec<folders::Model> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, make_folders());

    let req = test::TestRequest::get().uri("/api/folders").to_request();
    let raw: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(raw[0], json!({ "id": 1, "name": "Important" }));
}

#[actix_web::test]
async fn unknown_route_uses_error_body() {
    let store = empty_store().await;
    let app = init_app!(store.state);

    let req = test::TestRequest::get().uri("/api/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": { "message": "Not found" } }));
}
