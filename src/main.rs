use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use noteful::{
    api::{
        self,
        docs::ApiDoc,
        helpers::{payload_config, route_not_found},
        middleware::RequestTracing,
    },
    app_state::AppState,
    config::Config,
    database,
};

fn build_cors(config: &Config) -> Cors {
    match &config.cors_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
            .expose_headers(vec![actix_web::http::header::LOCATION]),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Failed to load configuration: {}", e),
        )
    })?;
    let db = database::connect().await?;

    if config.cors_origin.is_none() {
        log::warn!("CORS_ORIGIN is not set, accepting requests from any origin");
    }

    let state = web::Data::new(AppState::new(db, config.clone()));
    let host = config.host.clone();
    let port = config.port;

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(build_cors(&config))
            .wrap(RequestTracing)
            .app_data(state.clone())
            .app_data(payload_config(&config))
            .configure(api::init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::to(route_not_found))
    })
    .bind((host, port))?
    .run()
    .await
}
