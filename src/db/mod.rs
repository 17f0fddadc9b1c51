pub mod dashboard;
pub mod expense;
pub mod postgres_service;
pub mod product;
pub mod user;
