use safar_shared::Vertical;
use serde::{Deserialize, Serialize};

/// Field schema every vertical's records share. Storage and search are
/// generic over this trait instead of being copied per vertical.
pub trait Listing: Clone {
    fn id(&self) -> &str;
    fn departure_city(&self) -> &str;
    fn arrival_city(&self) -> &str;
    /// Base fare before any class multiplier.
    fn base_price(&self) -> f64;
    fn seats_available(&self) -> i32;
    fn vertical() -> Vertical;
}

/// A scheduled flight in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
    pub seats_available: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// A train service. `classes` is the ordered list of bookable coach
/// classes shown to the traveller; the order is display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    pub id: String,
    pub train_name: String,
    pub train_number: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
    pub seats_available: i32,
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// A bus trip. `bus_type` (Sleeper, Seater, ...) is a label only and never
/// changes the fare.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: String,
    pub bus_operator: String,
    pub bus_type: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
    pub seats_available: i32,
    pub amenities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Listing for Flight {
    fn id(&self) -> &str {
        &self.id
    }
    fn departure_city(&self) -> &str {
        &self.departure_city
    }
    fn arrival_city(&self) -> &str {
        &self.arrival_city
    }
    fn base_price(&self) -> f64 {
        self.price
    }
    fn seats_available(&self) -> i32 {
        self.seats_available
    }
    fn vertical() -> Vertical {
        Vertical::Flight
    }
}

impl Listing for Train {
    fn id(&self) -> &str {
        &self.id
    }
    fn departure_city(&self) -> &str {
        &self.departure_city
    }
    fn arrival_city(&self) -> &str {
        &self.arrival_city
    }
    fn base_price(&self) -> f64 {
        self.price
    }
    fn seats_available(&self) -> i32 {
        self.seats_available
    }
    fn vertical() -> Vertical {
        Vertical::Train
    }
}

impl Listing for Bus {
    fn id(&self) -> &str {
        &self.id
    }
    fn departure_city(&self) -> &str {
        &self.departure_city
    }
    fn arrival_city(&self) -> &str {
        &self.arrival_city
    }
    fn base_price(&self) -> f64 {
        self.price
    }
    fn seats_available(&self) -> i32 {
        self.seats_available
    }
    fn vertical() -> Vertical {
        Vertical::Bus
    }
}

/// A listing from any vertical, for callers that dispatch on `Vertical` at
/// runtime. Serialization is untagged so records keep the same shape as
/// their concrete type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnyListing {
    Flight(Flight),
    Train(Train),
    Bus(Bus),
}

impl AnyListing {
    pub fn id(&self) -> &str {
        match self {
            AnyListing::Flight(f) => &f.id,
            AnyListing::Train(t) => &t.id,
            AnyListing::Bus(b) => &b.id,
        }
    }

    pub fn base_price(&self) -> f64 {
        match self {
            AnyListing::Flight(f) => f.price,
            AnyListing::Train(t) => t.price,
            AnyListing::Bus(b) => b.price,
        }
    }

    pub fn vertical(&self) -> Vertical {
        match self {
            AnyListing::Flight(_) => Vertical::Flight,
            AnyListing::Train(_) => Vertical::Train,
            AnyListing::Bus(_) => Vertical::Bus,
        }
    }

    /// Copy of the listing with `price` replaced by the effective fare,
    /// for embedding in a booking record.
    pub fn with_price(&self, price: f64) -> AnyListing {
        let mut snapshot = self.clone();
        match &mut snapshot {
            AnyListing::Flight(f) => f.price = price,
            AnyListing::Train(t) => t.price = price,
            AnyListing::Bus(b) => b.price = price,
        }
        snapshot
    }
}

impl From<Flight> for AnyListing {
    fn from(flight: Flight) -> Self {
        AnyListing::Flight(flight)
    }
}

impl From<Train> for AnyListing {
    fn from(train: Train) -> Self {
        AnyListing::Train(train)
    }
}

impl From<Bus> for AnyListing {
    fn from(bus: Bus) -> Self {
        AnyListing::Bus(bus)
    }
}
