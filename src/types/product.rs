use serde::{Deserialize, Serialize};

use crate::types::error::AppError;
use crate::utils::validate;

pub const PRODUCT_REQUIRED_FIELDS: &[&str] = &["name", "category", "price", "stock", "sku", "image"];

/// Body of `POST /api/products`. Everything is optional at the serde level so
/// missing fields can be reported together.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RProductCreate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    pub description: Option<String>,
}

/// Body of `PUT /api/products/{id}`. Absent fields stay as stored.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct RProductUpdate {
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    pub description: Option<String>,
}

/// A product that passed every field rule.
#[derive(Debug, Clone, PartialEq)]
pub struct DBProductCreate {
    pub name: String,
    pub image: String,
    pub category: String,
    pub price: f64,
    pub stock: i32,
    pub sku: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DBProductPatch {
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub sku: Option<String>,
    pub description: Option<String>,
}

impl RProductCreate {
    pub fn validate(self) -> Result<DBProductCreate, AppError> {
        validate::require_fields(
            &[
                validate::is_supplied(&self.name),
                validate::is_supplied(&self.category),
                self.price.is_some(),
                self.stock.is_some(),
                validate::is_supplied(&self.sku),
                validate::is_supplied(&self.image),
            ],
            PRODUCT_REQUIRED_FIELDS,
        )?;

        // require_fields guarantees these are present
        let (Some(name), Some(image), Some(category), Some(price), Some(stock), Some(sku)) =
            (self.name, self.image, self.category, self.price, self.stock, self.sku)
        else {
            return Err(AppError::MissingFields(PRODUCT_REQUIRED_FIELDS));
        };

        Ok(DBProductCreate {
            name: validate::required_trimmed(&name, "Product name is required")?,
            image: validate::required(image, "Product image URL is required")?,
            category: validate::required_trimmed(&category, "Product category is required")?,
            price: validate::non_negative(price, "Price cannot be negative")?,
            stock: validate::stock(stock)?,
            sku: validate::required_trimmed(&sku, "SKU is required")?,
            description: self.description,
        })
    }
}

impl RProductUpdate {
    pub fn validate(self) -> Result<DBProductPatch, AppError> {
        Ok(DBProductPatch {
            name: self
                .name
                .map(|v| validate::required_trimmed(&v, "Product name is required"))
                .transpose()?,
            image: self
                .image
                .map(|v| validate::required(v, "Product image URL is required"))
                .transpose()?,
            category: self
                .category
                .map(|v| validate::required_trimmed(&v, "Product category is required"))
                .transpose()?,
            price: self
                .price
                .map(|v| validate::non_negative(v, "Price cannot be negative"))
                .transpose()?,
            stock: self.stock.map(validate::stock).transpose()?,
            sku: self
                .sku
                .map(|v| validate::required_trimmed(&v, "SKU is required"))
                .transpose()?,
            description: self.description,
        })
    }
}
