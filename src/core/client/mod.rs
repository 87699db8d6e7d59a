pub mod database;
pub mod lock;
