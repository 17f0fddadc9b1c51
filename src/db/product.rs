use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::product::{DBProductCreate, DBProductPatch};
use crate::types::response::matches_search;
use chrono::Utc;
use entity::product::{ActiveModel as ProductActive, Column, Entity as Product, Model as ProductModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

const DUPLICATE_SKU: &str = "Product with this SKU already exists";

impl PostgresService {
    /// All products, oldest first. `search` must be lowercase.
    pub async fn list_products(&self, search: Option<&str>) -> Result<Vec<ProductModel>, AppError> {
        let products = Product::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?;

        Ok(match search {
            Some(term) => products
                .into_iter()
                .filter(|p| matches_search(term, &[p.name.as_str(), p.category.as_str(), p.sku.as_str()]))
                .collect(),
            None => products,
        })
    }

    pub async fn get_product(&self, id: Uuid) -> Result<ProductModel, AppError> {
        Ok(Product::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Product not found".into()))?)
    }

    pub async fn create_product(&self, payload: DBProductCreate) -> Result<ProductModel, AppError> {
        let now = Utc::now();

        ProductActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            image: Set(payload.image),
            category: Set(payload.category),
            price: Set(payload.price),
            stock: Set(payload.stock),
            sku: Set(payload.sku),
            description: Set(payload.description),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await
        .map_err(|e| AppError::from(e).on_conflict(DUPLICATE_SKU))
    }

    pub async fn update_product(&self, id: Uuid, patch: DBProductPatch) -> Result<ProductModel, AppError> {
        let mut am: ProductActive = self.get_product(id).await?.into();

        if let Some(v) = patch.name { am.name = Set(v); }
        if let Some(v) = patch.image { am.image = Set(v); }
        if let Some(v) = patch.category { am.category = Set(v); }
        if let Some(v) = patch.price { am.price = Set(v); }
        if let Some(v) = patch.stock { am.stock = Set(v); }
        if let Some(v) = patch.sku { am.sku = Set(v); }
        if let Some(v) = patch.description { am.description = Set(Some(v)); }
        am.updated_at = Set(Utc::now());

        am.update(&self.database_connection)
            .await
            .map_err(|e| AppError::from(e).on_conflict(DUPLICATE_SKU))
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        let res = Product::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Product not found".into()));
        }
        Ok(())
    }
}
