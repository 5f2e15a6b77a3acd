use crate::models::{reference_id, BookingDetails};
use crate::pricing::FareSchedule;
use crate::seatmap::SeatMap;
use crate::BookingError;
use chrono::Utc;
use safar_catalog::listing::{Bus, Flight, Train};
use safar_catalog::repository::CatalogRepository;
use safar_catalog::search::search;
use safar_catalog::store::CatalogStore;
use safar_catalog::{AnyListing, CatalogError};
use safar_shared::{Passenger, Vertical};
use safar_store::BusinessRules;

/// In-process facade over catalog, search, pricing, and booking assembly.
/// The presentation layer talks only to this.
///
/// Listings are copied out of the injected repository at construction and
/// stay immutable for the life of the service.
pub struct BookingService {
    flights: CatalogStore<Flight>,
    trains: CatalogStore<Train>,
    buses: CatalogStore<Bus>,
    fares: FareSchedule,
    rules: BusinessRules,
    seat_map: SeatMap,
}

impl BookingService {
    pub fn new(catalog: &dyn CatalogRepository, rules: BusinessRules) -> Self {
        let seat_map = SeatMap::new(
            rules.bus_seat_rows,
            rules.bus_seat_columns,
            rules.blocked_bus_seats.iter().cloned().collect(),
        );
        Self {
            flights: CatalogStore::new(catalog.flights().to_vec()),
            trains: CatalogStore::new(catalog.trains().to_vec()),
            buses: CatalogStore::new(catalog.buses().to_vec()),
            fares: FareSchedule::default(),
            rules,
            seat_map,
        }
    }

    /// Full catalog for a vertical, in seed order.
    pub fn list(&self, vertical: Vertical) -> Vec<AnyListing> {
        match vertical {
            Vertical::Flight => wrap(self.flights.list().to_vec()),
            Vertical::Train => wrap(self.trains.list().to_vec()),
            Vertical::Bus => wrap(self.buses.list().to_vec()),
        }
    }

    /// Listings whose endpoints contain the query strings. Blank strings
    /// match everything; zero matches is the "no results" outcome, not an
    /// error.
    pub fn search(&self, vertical: Vertical, from: &str, to: &str) -> Vec<AnyListing> {
        tracing::debug!(%vertical, from, to, "searching catalog");
        match vertical {
            Vertical::Flight => wrap(search(self.flights.list(), from, to)),
            Vertical::Train => wrap(search(self.trains.list(), from, to)),
            Vertical::Bus => wrap(search(self.buses.list(), from, to)),
        }
    }

    pub fn get_by_id(&self, vertical: Vertical, id: &str) -> Result<AnyListing, CatalogError> {
        match vertical {
            Vertical::Flight => self.flights.get_by_id(id).map(|f| f.clone().into()),
            Vertical::Train => self.trains.get_by_id(id).map(|t| t.clone().into()),
            Vertical::Bus => self.buses.get_by_id(id).map(|b| b.clone().into()),
        }
    }

    /// Effective per-passenger fare for a listing and fare selection.
    pub fn price_for(&self, listing: &AnyListing, selection: Option<&str>) -> f64 {
        self.fares.price_for(listing, selection)
    }

    /// The seat grid shown on the bus booking form.
    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    /// Validate the passengers (and seats, for buses) and assemble the
    /// booking record. On any failure nothing is created; the error names
    /// the field or seat problem so the form can show it.
    pub fn build_booking(
        &self,
        vertical: Vertical,
        listing_id: &str,
        passengers: &[Passenger],
        selection: Option<&str>,
        seats: Option<&[String]>,
    ) -> Result<BookingDetails, BookingError> {
        let listing = self.get_by_id(vertical, listing_id)?;

        if passengers.is_empty() {
            return Err(BookingError::NoPassengers);
        }
        let max = self.rules.max_passengers(vertical);
        if passengers.len() > max {
            return Err(BookingError::TooManyPassengers { max });
        }
        for (index, passenger) in passengers.iter().enumerate() {
            if passenger.name.trim().is_empty() {
                return Err(BookingError::InvalidPassenger {
                    index,
                    reason: "name must not be blank".to_string(),
                });
            }
            if passenger.age <= 0 {
                return Err(BookingError::InvalidPassenger {
                    index,
                    reason: "age must be a positive number".to_string(),
                });
            }
        }

        if vertical == Vertical::Bus {
            let seats = seats.unwrap_or(&[]);
            self.seat_map.validate_selection(seats, passengers.len())?;
        }

        let fare = self.fares.price_for(&listing, selection);
        let booking = BookingDetails {
            id: reference_id(vertical),
            booking_type: vertical,
            booking_date: Utc::now(),
            passengers: passengers.to_vec(),
            fare_selection: selection.map(str::to_string),
            seats: seats.map(<[String]>::to_vec),
            total_amount: fare * passengers.len() as f64,
            item: listing.with_price(fare),
        };
        tracing::info!(
            reference = %booking.id,
            %vertical,
            total = booking.total_amount,
            "booking confirmed"
        );
        Ok(booking)
    }
}

fn wrap<L: Into<AnyListing>>(records: Vec<L>) -> Vec<AnyListing> {
    records.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use safar_shared::Gender;
    use safar_store::SeedCatalog;

    fn service() -> BookingService {
        BookingService::new(&SeedCatalog::new(), BusinessRules::default())
    }

    fn traveller(name: &str) -> Passenger {
        Passenger::new(name, 30, Gender::Other)
    }

    fn seat_labels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_by_id_round_trips_every_seeded_listing() {
        let service = service();
        for vertical in [Vertical::Flight, Vertical::Train, Vertical::Bus] {
            for listing in service.list(vertical) {
                let found = service.get_by_id(vertical, listing.id()).unwrap();
                assert_eq!(found, listing);
            }
        }
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let service = service();
        assert!(matches!(
            service.get_by_id(Vertical::Flight, "f99"),
            Err(CatalogError::NotFound(id)) if id == "f99"
        ));
    }

    #[test]
    fn test_blank_search_returns_full_catalog() {
        let service = service();
        for vertical in [Vertical::Flight, Vertical::Train, Vertical::Bus] {
            assert_eq!(
                service.search(vertical, "", ""),
                service.list(vertical),
                "blank query must match everything for {vertical}"
            );
        }
    }

    #[test]
    fn test_search_filters_by_both_endpoints() {
        let service = service();
        let results = service.search(Vertical::Flight, "mum", "delhi");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "f1");
        // Same arguments, same answer.
        assert_eq!(results, service.search(Vertical::Flight, "mum", "delhi"));
    }

    #[test]
    fn test_flight_booking_scenario() {
        let service = service();
        let passengers = vec![traveller("Asha Rao"), traveller("Vikram Rao")];
        let booking = service
            .build_booking(Vertical::Flight, "f1", &passengers, None, None)
            .unwrap();

        // f1 is the 4500-rupee Mumbai-Delhi flight.
        assert_eq!(booking.total_amount, 9000.0);
        assert_eq!(booking.booking_type, Vertical::Flight);
        assert_eq!(booking.passengers.len(), 2);
        assert!(booking.id.starts_with("FLT-"));
        assert_eq!(booking.id.len(), 10);
        assert!(booking.id[4..].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(booking.item.base_price(), 4500.0);
    }

    #[test]
    fn test_train_sleeper_discounts_snapshot_and_total() {
        let service = service();
        // t3 (Duronto Express) has base fare 1100 and a Sleeper class.
        let booking = service
            .build_booking(
                Vertical::Train,
                "t3",
                &[traveller("Asha Rao")],
                Some("Sleeper"),
                None,
            )
            .unwrap();
        assert_eq!(booking.total_amount, 880.0);
        assert_eq!(booking.item.base_price(), 880.0);
        assert_eq!(booking.fare_selection.as_deref(), Some("Sleeper"));
        assert!(booking.id.starts_with("TRN-"));
    }

    #[test]
    fn test_blank_name_rejected_with_no_record() {
        let service = service();
        let passengers = vec![traveller("Asha Rao"), Passenger::new("   ", 30, Gender::Male)];
        let err = service
            .build_booking(Vertical::Flight, "f1", &passengers, None, None)
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidPassenger { index: 1, .. }));
    }

    #[test]
    fn test_non_positive_age_rejected() {
        let service = service();
        let passengers = vec![Passenger::new("Asha Rao", 0, Gender::Female)];
        let err = service
            .build_booking(Vertical::Train, "t1", &passengers, Some("AC 2-Tier"), None)
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidPassenger { index: 0, .. }));
    }

    #[test]
    fn test_bus_seat_count_must_match_passengers() {
        let service = service();
        let passengers = vec![traveller("Asha Rao"), traveller("Vikram Rao")];
        let seats = seat_labels(&["1B"]);
        let err = service
            .build_booking(Vertical::Bus, "b1", &passengers, None, Some(&seats))
            .unwrap_err();
        assert!(matches!(
            err,
            BookingError::SeatCountMismatch {
                required: 2,
                selected: 1
            }
        ));
    }

    #[test]
    fn test_bus_booking_with_seats_succeeds() {
        let service = service();
        let passengers = vec![traveller("Asha Rao"), traveller("Vikram Rao")];
        let seats = seat_labels(&["1B", "2A"]);
        let booking = service
            .build_booking(
                Vertical::Bus,
                "b1",
                &passengers,
                Some("Sleeper"),
                Some(&seats),
            )
            .unwrap();
        // Bus seating type never moves the fare: 2 x 1200.
        assert_eq!(booking.total_amount, 2400.0);
        assert_eq!(booking.seats.as_deref(), Some(&seats[..]));
        assert!(booking.id.starts_with("BUS-"));
    }

    #[test]
    fn test_bus_blocked_seat_rejected() {
        let service = service();
        let seats = seat_labels(&["1A"]);
        let err = service
            .build_booking(Vertical::Bus, "b1", &[traveller("Asha Rao")], None, Some(&seats))
            .unwrap_err();
        assert!(matches!(err, BookingError::SeatUnavailable(seat) if seat == "1A"));
    }

    #[test]
    fn test_passenger_bounds_per_vertical() {
        let service = service();
        let five: Vec<Passenger> = (0..5).map(|i| traveller(&format!("P{i}"))).collect();
        let six: Vec<Passenger> = (0..6).map(|i| traveller(&format!("P{i}"))).collect();

        assert!(service
            .build_booking(Vertical::Flight, "f1", &five, None, None)
            .is_ok());
        assert!(matches!(
            service.build_booking(Vertical::Flight, "f1", &six, None, None),
            Err(BookingError::TooManyPassengers { max: 5 })
        ));
        assert!(service
            .build_booking(Vertical::Train, "t1", &six, None, None)
            .is_ok());
        assert!(matches!(
            service.build_booking(Vertical::Bus, "b1", &five, None, None),
            Err(BookingError::TooManyPassengers { max: 4 })
        ));
        assert!(matches!(
            service.build_booking(Vertical::Flight, "f1", &[], None, None),
            Err(BookingError::NoPassengers)
        ));
    }

    #[test]
    fn test_missing_listing_rejected_before_validation() {
        let service = service();
        let err = service
            .build_booking(Vertical::Bus, "b99", &[traveller("Asha Rao")], None, None)
            .unwrap_err();
        assert!(matches!(err, BookingError::NotFound(id) if id == "b99"));
    }

    struct OneTrainCatalog {
        trains: Vec<Train>,
    }

    impl CatalogRepository for OneTrainCatalog {
        fn flights(&self) -> &[Flight] {
            &[]
        }
        fn trains(&self) -> &[Train] {
            &self.trains
        }
        fn buses(&self) -> &[Bus] {
            &[]
        }
    }

    #[test]
    fn test_catalog_is_injected_not_baked_in() {
        let catalog = OneTrainCatalog {
            trains: vec![Train {
                id: "night-mail".to_string(),
                train_name: "Night Mail".to_string(),
                train_number: "00001".to_string(),
                departure_city: "Pune".to_string(),
                arrival_city: "Nagpur".to_string(),
                departure_time: "09:00 PM".to_string(),
                arrival_time: "06:00 AM".to_string(),
                duration: "9h".to_string(),
                price: 1000.0,
                seats_available: 60,
                classes: vec!["Sleeper".to_string()],
                rating: None,
            }],
        };
        let service = BookingService::new(&catalog, BusinessRules::default());

        assert!(service.list(Vertical::Flight).is_empty());
        let booking = service
            .build_booking(
                Vertical::Train,
                "night-mail",
                &[traveller("Asha Rao")],
                Some("Sleeper"),
                None,
            )
            .unwrap();
        assert_eq!(booking.total_amount, 800.0);
        assert_eq!(booking.item.base_price(), 800.0);
    }

    #[test]
    fn test_booking_serializes_camel_case() {
        let service = service();
        let booking = service
            .build_booking(Vertical::Flight, "f1", &[traveller("Asha Rao")], None, None)
            .unwrap();
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["bookingType"], "flight");
        assert_eq!(json["totalAmount"], 4500.0);
        assert_eq!(json["item"]["flightNumber"], "6E-123");
        assert!(json.get("seats").is_none());
    }
}
