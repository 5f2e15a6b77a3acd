pub mod listing;
pub mod repository;
pub mod search;
pub mod store;

pub use listing::{AnyListing, Bus, Flight, Listing, Train};
pub use repository::CatalogRepository;
pub use store::CatalogStore;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Listing not found: {0}")]
    NotFound(String),
}
