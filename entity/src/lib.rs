pub mod expense;
pub mod product;
pub mod user;

/*
 Products, users and expenses are standalone collections. Nothing references
 anything else, so there are no relations to declare.
 */
