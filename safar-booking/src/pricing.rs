use safar_catalog::AnyListing;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Class-label to fare-multiplier table for trains. The labels and factors
/// are fixed domain data; any class absent from the table rides at the
/// base fare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareSchedule {
    class_multipliers: HashMap<String, f64>,
}

impl Default for FareSchedule {
    fn default() -> Self {
        let mut m = HashMap::new();
        m.insert("AC 1st Class".to_string(), 2.0);
        m.insert("AC 2-Tier".to_string(), 1.5);
        m.insert("AC 3-Tier".to_string(), 1.2);
        m.insert("AC Chair Car".to_string(), 1.3);
        m.insert("Executive Class".to_string(), 2.2);
        m.insert("Sleeper".to_string(), 0.8);
        Self {
            class_multipliers: m,
        }
    }
}

impl FareSchedule {
    pub fn new(class_multipliers: HashMap<String, f64>) -> Self {
        Self { class_multipliers }
    }

    /// Multiplier for a train class. Exact-match lookup; unknown or
    /// unselected classes fall back to 1.0.
    pub fn multiplier(&self, class_label: &str) -> f64 {
        self.class_multipliers
            .get(class_label)
            .copied()
            .unwrap_or(1.0)
    }

    /// Effective per-passenger fare for a listing given the selected class
    /// or seating type. Only train classes move the price; the bus seating
    /// type is a label and flights have no refinement at all.
    pub fn price_for(&self, listing: &AnyListing, selection: Option<&str>) -> f64 {
        match listing {
            AnyListing::Train(train) => {
                let multiplier = selection.map(|c| self.multiplier(c)).unwrap_or(1.0);
                train.price * multiplier
            }
            AnyListing::Flight(flight) => flight.price,
            AnyListing::Bus(bus) => bus.price,
        }
    }
}
