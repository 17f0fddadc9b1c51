use actix_web::web;

use crate::utils::webutils::{json_config, query_config};

pub mod dashboard;
pub mod expense;
pub mod health;
pub mod product;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(query_config());

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/products")
                    .service(product::list::list)
                    .service(product::create::create)
                    .service(product::update::update)
                    .service(product::delete::delete)
            )
            .service(
                web::scope("/users")
                    .service(user::list::list)
                    .service(user::create::create)
                    .service(user::update::update)
                    .service(user::delete::delete)
                    .service(user::toggle_status::toggle_status)
            )
            .service(
                web::scope("/expenses")
                    .service(expense::list::list)
                    .service(expense::create::create)
                    .service(expense::update::update)
                    .service(expense::delete::delete)
            )
            .service(
                web::scope("/dashboard").service(dashboard::summary)
            )
    );
}
