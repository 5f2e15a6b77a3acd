use safar_catalog::listing::{Bus, Flight, Train};
use safar_catalog::repository::CatalogRepository;

/// The fixed demo catalog. Seeded once at construction and never mutated;
/// every lookup reads the same records for the life of the process.
pub struct SeedCatalog {
    flights: Vec<Flight>,
    trains: Vec<Train>,
    buses: Vec<Bus>,
}

impl SeedCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            flights: seed_flights(),
            trains: seed_trains(),
            buses: seed_buses(),
        };
        tracing::debug!(
            flights = catalog.flights.len(),
            trains = catalog.trains.len(),
            buses = catalog.buses.len(),
            "seeded demo catalog"
        );
        catalog
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for SeedCatalog {
    fn flights(&self) -> &[Flight] {
        &self.flights
    }

    fn trains(&self) -> &[Train] {
        &self.trains
    }

    fn buses(&self) -> &[Bus] {
        &self.buses
    }
}

fn seed_flights() -> Vec<Flight> {
    vec![
        Flight {
            id: "f1".to_string(),
            airline: "IndiGo".to_string(),
            flight_number: "6E-123".to_string(),
            departure_city: "Mumbai".to_string(),
            arrival_city: "Delhi".to_string(),
            departure_time: "08:00 AM".to_string(),
            arrival_time: "10:00 AM".to_string(),
            duration: "2h".to_string(),
            price: 4500.0,
            seats_available: 45,
            image: Some(
                "https://images.unsplash.com/photo-1436491865332-7a61a109cc05?q=80&w=2074"
                    .to_string(),
            ),
            rating: Some(4.2),
        },
        Flight {
            id: "f2".to_string(),
            airline: "Air India".to_string(),
            flight_number: "AI-456".to_string(),
            departure_city: "Delhi".to_string(),
            arrival_city: "Bangalore".to_string(),
            departure_time: "10:30 AM".to_string(),
            arrival_time: "01:00 PM".to_string(),
            duration: "2h 30m".to_string(),
            price: 5200.0,
            seats_available: 30,
            image: Some(
                "https://images.unsplash.com/photo-1464037866556-6812c9d1c72e?q=80&w=2070"
                    .to_string(),
            ),
            rating: Some(3.8),
        },
        Flight {
            id: "f3".to_string(),
            airline: "SpiceJet".to_string(),
            flight_number: "SG-789".to_string(),
            departure_city: "Bangalore".to_string(),
            arrival_city: "Kolkata".to_string(),
            departure_time: "02:00 PM".to_string(),
            arrival_time: "04:30 PM".to_string(),
            duration: "2h 30m".to_string(),
            price: 3800.0,
            seats_available: 22,
            image: Some(
                "https://images.unsplash.com/photo-1525624286412-4099c83c1bc8?q=80&w=1932"
                    .to_string(),
            ),
            rating: Some(3.9),
        },
        Flight {
            id: "f4".to_string(),
            airline: "Vistara".to_string(),
            flight_number: "UK-321".to_string(),
            departure_city: "Chennai".to_string(),
            arrival_city: "Mumbai".to_string(),
            departure_time: "06:00 PM".to_string(),
            arrival_time: "08:00 PM".to_string(),
            duration: "2h".to_string(),
            price: 6100.0,
            seats_available: 15,
            image: Some(
                "https://images.unsplash.com/photo-1494059980473-813e73ee784b?q=80&w=2069"
                    .to_string(),
            ),
            rating: Some(4.5),
        },
    ]
}

fn seed_trains() -> Vec<Train> {
    vec![
        Train {
            id: "t1".to_string(),
            train_name: "Rajdhani Express".to_string(),
            train_number: "12301".to_string(),
            departure_city: "Delhi".to_string(),
            arrival_city: "Mumbai".to_string(),
            departure_time: "04:30 PM".to_string(),
            arrival_time: "08:30 AM".to_string(),
            duration: "16h".to_string(),
            price: 1800.0,
            seats_available: 120,
            classes: vec![
                "AC 1st Class".to_string(),
                "AC 2-Tier".to_string(),
                "AC 3-Tier".to_string(),
            ],
            rating: Some(4.1),
        },
        Train {
            id: "t2".to_string(),
            train_name: "Shatabdi Express".to_string(),
            train_number: "12002".to_string(),
            departure_city: "Mumbai".to_string(),
            arrival_city: "Pune".to_string(),
            departure_time: "06:00 AM".to_string(),
            arrival_time: "09:30 AM".to_string(),
            duration: "3h 30m".to_string(),
            price: 750.0,
            seats_available: 80,
            classes: vec!["AC Chair Car".to_string(), "Executive Class".to_string()],
            rating: Some(4.3),
        },
        Train {
            id: "t3".to_string(),
            train_name: "Duronto Express".to_string(),
            train_number: "12245".to_string(),
            departure_city: "Bangalore".to_string(),
            arrival_city: "Chennai".to_string(),
            departure_time: "11:00 PM".to_string(),
            arrival_time: "05:00 AM".to_string(),
            duration: "6h".to_string(),
            price: 1100.0,
            seats_available: 95,
            classes: vec![
                "AC 2-Tier".to_string(),
                "AC 3-Tier".to_string(),
                "Sleeper".to_string(),
            ],
            rating: Some(3.9),
        },
        Train {
            id: "t4".to_string(),
            train_name: "Garib Rath".to_string(),
            train_number: "12203".to_string(),
            departure_city: "Kolkata".to_string(),
            arrival_city: "Delhi".to_string(),
            departure_time: "02:00 PM".to_string(),
            arrival_time: "10:00 AM".to_string(),
            duration: "20h".to_string(),
            price: 850.0,
            seats_available: 150,
            classes: vec!["AC 3-Tier".to_string(), "Sleeper".to_string()],
            rating: Some(3.7),
        },
    ]
}

fn seed_buses() -> Vec<Bus> {
    vec![
        Bus {
            id: "b1".to_string(),
            bus_operator: "SRS Travels".to_string(),
            bus_type: "Volvo Multi-Axle Sleeper".to_string(),
            departure_city: "Bangalore".to_string(),
            arrival_city: "Hyderabad".to_string(),
            departure_time: "10:00 PM".to_string(),
            arrival_time: "06:00 AM".to_string(),
            duration: "8h".to_string(),
            price: 1200.0,
            seats_available: 35,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Port".to_string(),
                "Blanket".to_string(),
                "Water Bottle".to_string(),
            ],
            rating: Some(4.2),
        },
        Bus {
            id: "b2".to_string(),
            bus_operator: "VRL Travels".to_string(),
            bus_type: "AC Sleeper".to_string(),
            departure_city: "Mumbai".to_string(),
            arrival_city: "Goa".to_string(),
            departure_time: "08:00 PM".to_string(),
            arrival_time: "08:00 AM".to_string(),
            duration: "12h".to_string(),
            price: 1500.0,
            seats_available: 25,
            amenities: vec![
                "WiFi".to_string(),
                "Charging Port".to_string(),
                "Entertainment System".to_string(),
            ],
            rating: Some(4.0),
        },
        Bus {
            id: "b3".to_string(),
            bus_operator: "Kallada Travels".to_string(),
            bus_type: "Mercedes AC Sleeper".to_string(),
            departure_city: "Chennai".to_string(),
            arrival_city: "Bangalore".to_string(),
            departure_time: "09:30 PM".to_string(),
            arrival_time: "04:30 AM".to_string(),
            duration: "7h".to_string(),
            price: 950.0,
            seats_available: 40,
            amenities: vec![
                "WiFi".to_string(),
                "Snacks".to_string(),
                "Water Bottle".to_string(),
            ],
            rating: Some(3.8),
        },
        Bus {
            id: "b4".to_string(),
            bus_operator: "Ashok Travels".to_string(),
            bus_type: "Non-AC Seater".to_string(),
            departure_city: "Delhi".to_string(),
            arrival_city: "Jaipur".to_string(),
            departure_time: "06:00 AM".to_string(),
            arrival_time: "12:00 PM".to_string(),
            duration: "6h".to_string(),
            price: 550.0,
            seats_available: 45,
            amenities: vec!["Water Bottle".to_string()],
            rating: Some(3.5),
        },
    ]
}
