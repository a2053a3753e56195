use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, database::models::folders, errors::AppError};

#[utoipa::path(
    get,
    path = "/api/folders",
    tag = "Folders",
    responses(
        (status = 200, description = "List all folders", body = [folders::Model])
    )
)]
#[get("")]
pub async fn get_folders(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let folders = app_state.folders.list().await?;
    Ok(HttpResponse::Ok().json(folders))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/folders").service(get_folders));
}
