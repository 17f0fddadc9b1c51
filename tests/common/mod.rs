use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use inventory_admin::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres.start().await.expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(5432).await.expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService")
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use chrono::NaiveDate;
    use inventory_admin::types::expense::RExpenseCreate;
    use inventory_admin::types::product::RProductCreate;
    use inventory_admin::types::user::RUserCreate;

    pub fn sample_product(sku: &str) -> RProductCreate {
        RProductCreate {
            name: Some("Hydrating Face Cream".to_string()),
            image: Some("/images/face-cream.png".to_string()),
            category: Some("Moisturizer".to_string()),
            price: Some(29.99),
            stock: Some(42),
            sku: Some(sku.to_string()),
            description: Some("Daily moisturizer".to_string()),
        }
    }

    pub fn sample_user(email: &str) -> RUserCreate {
        RUserCreate {
            name: Some("Jane Doe".to_string()),
            email: Some(email.to_string()),
            avatar: Some("/placeholder.svg".to_string()),
            ..Default::default()
        }
    }

    pub fn sample_expense(category: &str, amount: f64) -> RExpenseCreate {
        RExpenseCreate {
            date: NaiveDate::from_ymd_opt(2025, 4, 1),
            category: Some(category.to_string()),
            description: Some("Monthly bill".to_string()),
            amount: Some(amount),
        }
    }
}
