use actix_web::{web, App};
use entity::{expense::Model as ExpenseModel, product::Model as ProductModel, user::Model as UserModel};
use inventory_admin::{db::postgres_service::PostgresService, types::error::AppError};
use std::sync::Arc;

use super::test_data;

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(inventory_admin::routes::configure_routes)
    }

    #[allow(dead_code)]
    pub async fn create_test_product(&self, sku: &str, stock: i64, price: f64) -> Result<ProductModel, AppError> {
        let payload = test_data::sample_product(sku);
        let payload = inventory_admin::types::product::RProductCreate {
            stock: Some(stock),
            price: Some(price),
            name: Some(format!("Product {sku}")),
            ..payload
        };
        self.db.create_product(payload.validate()?).await
    }

    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str) -> Result<UserModel, AppError> {
        self.db.create_user(test_data::sample_user(email).validate()?).await
    }

    #[allow(dead_code)]
    pub async fn create_test_expense(&self, category: &str, amount: f64) -> Result<ExpenseModel, AppError> {
        self.db.create_expense(test_data::sample_expense(category, amount).validate()?).await
    }
}
