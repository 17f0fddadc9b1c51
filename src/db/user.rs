use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::matches_search;
use crate::types::user::{DBUserCreate, DBUserPatch};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

const DUPLICATE_EMAIL: &str = "Email already exists";

impl PostgresService {
    pub async fn list_users(&self, search: Option<&str>) -> Result<Vec<UserModel>, AppError> {
        let users = User::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?;

        Ok(match search {
            Some(term) => users
                .into_iter()
                .filter(|u| matches_search(term, &[u.name.as_str(), u.email.as_str(), u.role.as_str()]))
                .collect(),
            None => users,
        })
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User not found".into()))?)
    }

    /// Returns `(active, total)`.
    pub async fn count_users(&self) -> Result<(u64, u64), AppError> {
        let total = User::find().count(&self.database_connection).await?;
        let active = User::find()
            .filter(Column::Active.eq(true))
            .count(&self.database_connection)
            .await?;
        Ok((active, total))
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let now = Utc::now();

        UserActive {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            email: Set(payload.email),
            role: Set(payload.role.to_string()),
            avatar: Set(payload.avatar),
            active: Set(payload.active),
            phone: Set(payload.phone),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await
        .map_err(|e| AppError::from(e).on_conflict(DUPLICATE_EMAIL))
    }

    pub async fn update_user(&self, id: Uuid, patch: DBUserPatch) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(id).await?.into();

        if let Some(v) = patch.name { am.name = Set(v); }
        if let Some(v) = patch.email { am.email = Set(v); }
        if let Some(v) = patch.role { am.role = Set(v.to_string()); }
        if let Some(v) = patch.avatar { am.avatar = Set(v); }
        if let Some(v) = patch.active { am.active = Set(v); }
        if let Some(v) = patch.phone { am.phone = Set(Some(v)); }
        am.updated_at = Set(Utc::now());

        am.update(&self.database_connection)
            .await
            .map_err(|e| AppError::from(e).on_conflict(DUPLICATE_EMAIL))
    }

    /// Flips `active` in one statement and returns the stored user.
    pub async fn toggle_user_active(&self, id: Uuid) -> Result<UserModel, AppError> {
        let res = User::update_many()
            .col_expr(Column::Active, Expr::col(Column::Active).not())
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .exec(&self.database_connection)
            .await?;

        if res.rows_affected == 0 {
            return Err(AppError::NotFound("User not found".into()));
        }
        self.get_user_by_id(id).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), AppError> {
        let res = User::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("User not found".into()));
        }
        Ok(())
    }
}
