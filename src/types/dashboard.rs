use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Below this a product shows up in the low stock table.
pub const LOW_STOCK_THRESHOLD: i32 = 20;
/// Below this a low stock product is flagged critical.
pub const CRITICAL_STOCK_THRESHOLD: i32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    Critical,
    Low,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LowStockItem {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub stock: i32,
    pub price: f64,
    pub level: StockLevel,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Everything the dashboard cards and tables render.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_products: u64,
    pub total_stock_value: f64,
    pub total_expenses: f64,
    pub low_stock: Vec<LowStockItem>,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub active_users: u64,
    pub total_users: u64,
}

impl DashboardSummary {
    pub fn compute(
        products: &[entity::product::Model],
        expenses: &[entity::expense::Model],
        active_users: u64,
        total_users: u64,
    ) -> Self {
        let total_stock_value = products
            .iter()
            .map(|p| p.price * f64::from(p.stock))
            .sum();

        let mut low_stock: Vec<LowStockItem> = products
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .map(|p| LowStockItem {
                id: p.id,
                name: p.name.clone(),
                category: p.category.clone(),
                stock: p.stock,
                price: p.price,
                level: if p.stock < CRITICAL_STOCK_THRESHOLD {
                    StockLevel::Critical
                } else {
                    StockLevel::Low
                },
            })
            .collect();
        low_stock.sort_by_key(|item| item.stock);

        let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
        for e in expenses {
            *by_category.entry(e.category.as_str()).or_default() += e.amount;
        }

        DashboardSummary {
            total_products: products.len() as u64,
            total_stock_value,
            total_expenses: expenses.iter().map(|e| e.amount).sum(),
            low_stock,
            expenses_by_category: by_category
                .into_iter()
                .map(|(category, amount)| CategoryTotal { category: category.to_string(), amount })
                .collect(),
            active_users,
            total_users,
        }
    }
}
