use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::expense::{DBExpenseCreate, DBExpensePatch};
use crate::types::response::matches_search;
use chrono::Utc;
use entity::expense::{ActiveModel as ExpenseActive, Column, Entity as Expense, Model as ExpenseModel};
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    /// Newest expense date first.
    pub async fn list_expenses(&self, search: Option<&str>) -> Result<Vec<ExpenseModel>, AppError> {
        let expenses = Expense::find()
            .order_by_desc(Column::Date)
            .order_by_desc(Column::CreatedAt)
            .all(&self.database_connection)
            .await?;

        Ok(match search {
            Some(term) => expenses
                .into_iter()
                .filter(|e| matches_search(term, &[e.category.as_str(), e.description.as_str()]))
                .collect(),
            None => expenses,
        })
    }

    pub async fn get_expense(&self, id: Uuid) -> Result<ExpenseModel, AppError> {
        Ok(Expense::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Expense not found".into()))?)
    }

    pub async fn create_expense(&self, payload: DBExpenseCreate) -> Result<ExpenseModel, AppError> {
        let now = Utc::now();

        Ok(ExpenseActive {
            id: Set(Uuid::new_v4()),
            date: Set(payload.date),
            category: Set(payload.category),
            description: Set(payload.description),
            amount: Set(payload.amount),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn update_expense(&self, id: Uuid, patch: DBExpensePatch) -> Result<ExpenseModel, AppError> {
        let mut am: ExpenseActive = self.get_expense(id).await?.into();

        if let Some(v) = patch.date { am.date = Set(v); }
        if let Some(v) = patch.category { am.category = Set(v); }
        if let Some(v) = patch.description { am.description = Set(v); }
        if let Some(v) = patch.amount { am.amount = Set(v); }
        am.updated_at = Set(Utc::now());

        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_expense(&self, id: Uuid) -> Result<(), AppError> {
        let res = Expense::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Expense not found".into()));
        }
        Ok(())
    }
}
