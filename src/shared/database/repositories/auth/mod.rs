// Auth repositories
pub mod user_repository;
pub mod memory_user_store;

pub use user_repository::*;
pub use memory_user_store::*;
