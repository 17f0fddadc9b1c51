use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate;

pub const EXPENSE_REQUIRED_FIELDS: &[&str] = &["date", "category", "description", "amount"];

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RExpenseCreate {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RExpenseUpdate {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DBExpenseCreate {
    pub date: NaiveDate,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DBExpensePatch {
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
}

impl RExpenseCreate {
    pub fn validate(self) -> Result<DBExpenseCreate, AppError> {
        validate::require_fields(
            &[
                self.date.is_some(),
                validate::is_supplied(&self.category),
                validate::is_supplied(&self.description),
                self.amount.is_some(),
            ],
            EXPENSE_REQUIRED_FIELDS,
        )?;

        let (Some(date), Some(category), Some(description), Some(amount)) =
            (self.date, self.category, self.description, self.amount)
        else {
            return Err(AppError::MissingFields(EXPENSE_REQUIRED_FIELDS));
        };

        Ok(DBExpenseCreate {
            date,
            category: validate::required_trimmed(&category, "Expense category is required")?,
            description: validate::required_trimmed(&description, "Expense description is required")?,
            amount: validate::non_negative(amount, "Amount cannot be negative")?,
        })
    }
}

impl RExpenseUpdate {
    pub fn validate(self) -> Result<DBExpensePatch, AppError> {
        Ok(DBExpensePatch {
            date: self.date,
            category: self
                .category
                .map(|v| validate::required_trimmed(&v, "Expense category is required"))
                .transpose()?,
            description: self
                .description
                .map(|v| validate::required_trimmed(&v, "Expense description is required"))
                .transpose()?,
            amount: self
                .amount
                .map(|v| validate::non_negative(v, "Amount cannot be negative"))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_parses_date_from_json() {
        let body: RExpenseCreate = serde_json::from_value(serde_json::json!({
            "date": "2025-04-05",
            "category": "Marketing",
            "description": "Instagram ad campaign",
            "amount": 500.0
        }))
        .unwrap();

        let expense = body.validate().unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
        assert_eq!(expense.amount, 500.0);
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = RExpenseCreate {
            date: NaiveDate::from_ymd_opt(2025, 4, 1),
            category: Some("Utilities".into()),
            description: Some("Electricity bill".into()),
            amount: Some(-150.0),
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "Amount cannot be negative");
    }

    #[test]
    fn missing_date_lists_required_fields() {
        let err = RExpenseCreate {
            category: Some("Utilities".into()),
            description: Some("Electricity bill".into()),
            amount: Some(150.0),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AppError::MissingFields(f) if f == EXPENSE_REQUIRED_FIELDS));
    }

    #[test]
    fn update_rejects_rule_violations() {
        let err = RExpenseUpdate { amount: Some(-1.0), ..Default::default() }
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Amount cannot be negative");

        let err = RExpenseUpdate { category: Some("  ".into()), ..Default::default() }
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Expense category is required");

        let patch = RExpenseUpdate { description: Some(" Ink ".into()), ..Default::default() }
            .validate()
            .unwrap();
        assert_eq!(patch.description.as_deref(), Some("Ink"));
        assert_eq!(patch.amount, None);
    }
}
