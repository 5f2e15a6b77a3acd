use chrono::{DateTime, Utc};
use safar_catalog::AnyListing;
use safar_shared::{Passenger, Vertical};
use serde::{Deserialize, Serialize};

/// A confirmed booking handed back to the caller. It lives only in the
/// caller's session state; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub id: String,
    pub booking_type: Vertical,
    pub booking_date: DateTime<Utc>,
    pub passengers: Vec<Passenger>,
    /// Train class or bus seating type the traveller picked, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare_selection: Option<String>,
    /// Selected bus seats; absent for flights and trains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<Vec<String>>,
    pub total_amount: f64,
    /// Snapshot of the listing at the effective (class-adjusted) fare.
    pub item: AnyListing,
}

/// Reference id: vertical prefix plus the last six digits of the
/// millisecond clock, e.g. `FLT-493021`. Two bookings inside the same
/// millisecond would collide; the scheme offers no stronger guarantee.
pub fn reference_id(vertical: Vertical) -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("{}-{}", vertical.reference_prefix(), tail)
}
