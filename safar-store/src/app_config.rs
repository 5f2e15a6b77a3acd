use safar_shared::Vertical;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
}

/// Booking-form rules the presentation layer enforces. Injected rather
/// than scattered as constants so a caller can widen or narrow them.
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_flight_max")]
    pub flight_max_passengers: usize,
    #[serde(default = "default_train_max")]
    pub train_max_passengers: usize,
    #[serde(default = "default_bus_max")]
    pub bus_max_passengers: usize,
    #[serde(default = "default_seat_rows")]
    pub bus_seat_rows: u32,
    #[serde(default = "default_seat_columns")]
    pub bus_seat_columns: u32,
    /// Demo inventory: these seats render as already sold.
    #[serde(default = "default_blocked_seats")]
    pub blocked_bus_seats: Vec<String>,
}

fn default_flight_max() -> usize {
    5
}

fn default_train_max() -> usize {
    6
}

fn default_bus_max() -> usize {
    4
}

fn default_seat_rows() -> u32 {
    4
}

fn default_seat_columns() -> u32 {
    5
}

fn default_blocked_seats() -> Vec<String> {
    ["1A", "2B", "3C", "4D"].iter().map(|s| s.to_string()).collect()
}

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            flight_max_passengers: default_flight_max(),
            train_max_passengers: default_train_max(),
            bus_max_passengers: default_bus_max(),
            bus_seat_rows: default_seat_rows(),
            bus_seat_columns: default_seat_columns(),
            blocked_bus_seats: default_blocked_seats(),
        }
    }
}

impl BusinessRules {
    /// Upper bound on passengers per booking for a vertical. The lower
    /// bound is always one.
    pub fn max_passengers(&self, vertical: Vertical) -> usize {
        match vertical {
            Vertical::Flight => self.flight_max_passengers,
            Vertical::Train => self.train_max_passengers,
            Vertical::Bus => self.bus_max_passengers,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Add in the current environment file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SAFAR_BUSINESS_RULES__BUS_MAX_PASSENGERS=6`
            .add_source(config::Environment::with_prefix("SAFAR").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
