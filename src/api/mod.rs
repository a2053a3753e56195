pub mod context;
pub mod docs;
pub mod folders;
pub mod helpers;
pub mod middleware;
pub mod notes;
pub mod validation;

use actix_web::web;

/// Mounts every resource under `/api`. The caller registers
/// `web::Data<AppState>` on the app.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(notes::init_routes)
            .configure(folders::init_routes),
    );
}
