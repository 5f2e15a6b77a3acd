use crate::listing::{Bus, Flight, Train};

/// Read-only seam over the seeded catalogs. The booking service takes this
/// at construction, so the static seed can later be swapped for a real
/// data source without touching search, pricing, or validation.
pub trait CatalogRepository: Send + Sync {
    fn flights(&self) -> &[Flight];
    fn trains(&self) -> &[Train];
    fn buses(&self) -> &[Bus];
}
