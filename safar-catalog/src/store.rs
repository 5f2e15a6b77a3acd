use crate::listing::Listing;
use crate::CatalogError;

/// Immutable, insertion-ordered collection of one vertical's listings.
/// Seeded once at startup; there is no mutation or deletion.
pub struct CatalogStore<L: Listing> {
    records: Vec<L>,
}

impl<L: Listing> CatalogStore<L> {
    pub fn new(records: Vec<L>) -> Self {
        Self { records }
    }

    /// Every record, in seed order.
    pub fn list(&self) -> &[L] {
        &self.records
    }

    pub fn get_by_id(&self, id: &str) -> Result<&L, CatalogError> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::Flight;

    fn flight(id: &str, from: &str, to: &str, price: f64) -> Flight {
        Flight {
            id: id.to_string(),
            airline: "IndiGo".to_string(),
            flight_number: "6E-123".to_string(),
            departure_city: from.to_string(),
            arrival_city: to.to_string(),
            departure_time: "08:00 AM".to_string(),
            arrival_time: "10:00 AM".to_string(),
            duration: "2h".to_string(),
            price,
            seats_available: 45,
            image: None,
            rating: None,
        }
    }

    #[test]
    fn test_list_preserves_seed_order() {
        let store = CatalogStore::new(vec![
            flight("f1", "Mumbai", "Delhi", 4500.0),
            flight("f2", "Delhi", "Bangalore", 5200.0),
        ]);
        let ids: Vec<&str> = store.list().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2"]);
    }

    #[test]
    fn test_get_by_id_hit_and_miss() {
        let store = CatalogStore::new(vec![flight("f1", "Mumbai", "Delhi", 4500.0)]);
        assert_eq!(store.get_by_id("f1").unwrap().id, "f1");
        assert!(matches!(
            store.get_by_id("f9"),
            Err(CatalogError::NotFound(id)) if id == "f9"
        ));
    }
}
