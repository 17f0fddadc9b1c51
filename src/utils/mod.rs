pub mod validate;
pub mod webutils;
