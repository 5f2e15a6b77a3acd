pub mod app_config;
pub mod catalog_repo;

pub use app_config::{BusinessRules, Config};
pub use catalog_repo::SeedCatalog;
