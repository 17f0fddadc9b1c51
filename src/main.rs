use actix_web::{middleware::Logger, web, App, HttpServer};
use inventory_admin::config::config;
use inventory_admin::db::postgres_service::PostgresService;
use inventory_admin::routes::configure_routes;
use inventory_admin::utils::webutils::cors;
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = config();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .map_err(|e| {
                error!("Database connection error: {e}");
                error!("Make sure PostgreSQL is running and reachable at POSTGRES_URI");
                std::io::Error::other(e)
            })?
    );

    info!("Server running on {addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
