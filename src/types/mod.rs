pub mod dashboard;
pub mod error;
pub mod expense;
pub mod product;
pub mod response;
pub mod user;
