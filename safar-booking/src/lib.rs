pub mod manifest;
pub mod models;
pub mod pricing;
pub mod seatmap;
pub mod service;

pub use manifest::PassengerManifest;
pub use models::BookingDetails;
pub use pricing::FareSchedule;
pub use seatmap::SeatMap;
pub use service::BookingService;

use safar_catalog::CatalogError;

/// Booking failures. Every variant is recoverable: the caller re-renders
/// the form or redirects with the message, nothing is fatal.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Listing not found: {0}")]
    NotFound(String),

    #[error("Passenger {index}: {reason}")]
    InvalidPassenger { index: usize, reason: String },

    #[error("Please select exactly {required} seats for your booking (selected {selected})")]
    SeatCountMismatch { required: usize, selected: usize },

    #[error("Seat {0} is not available on this trip")]
    SeatUnavailable(String),

    #[error("Seat {0} is selected more than once")]
    DuplicateSeat(String),

    #[error("You can book for a maximum of {max} passengers at once")]
    TooManyPassengers { max: usize },

    #[error("At least one passenger is required")]
    NoPassengers,
}

impl From<CatalogError> for BookingError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => BookingError::NotFound(id),
        }
    }
}
