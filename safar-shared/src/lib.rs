pub mod passenger;
pub mod vertical;

pub use passenger::{Gender, Passenger};
pub use vertical::Vertical;
