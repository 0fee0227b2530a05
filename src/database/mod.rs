pub mod manager;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod stitch;

pub use manager::{DatabaseError, DatabaseManager, HealthProbe};
pub use repository::Repositories;
