pub mod create;
pub mod delete;
pub mod list;
pub mod toggle_status;
pub mod update;
