use chrono::NaiveDate;
use serde::Deserialize;
use skyseat_core::Flight;
use skyseat_seating::{SeatMap, SeatNumber};
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Validated on load: a bad seat map fails start-up
    pub seat_map: SeatMap,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// CORS origins; empty allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// Give flights without bookings a random occupancy on first fetch
    #[serde(default)]
    pub seed_occupancy: bool,
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub flights: Vec<FlightSeed>,
}

/// Flight entry in the `[[catalog.flights]]` tables
#[derive(Debug, Deserialize, Clone)]
pub struct FlightSeed {
    pub id: i64,
    pub departure: String,
    pub destination: String,
    pub flight_date: NaiveDate,
    pub flight_duration: String,
    pub stopover: Option<String>,
    pub economy_price: i32,
    pub business_price: i32,
    #[serde(default)]
    pub booked_seats: Vec<SeatNumber>,
}

impl From<FlightSeed> for Flight {
    fn from(seed: FlightSeed) -> Self {
        Flight {
            id: seed.id,
            departure: seed.departure,
            destination: seed.destination,
            flight_date: seed.flight_date,
            flight_duration: seed.flight_duration,
            stopover: seed.stopover,
            economy_price: seed.economy_price,
            business_price: seed.business_price,
            booked_seats: seed.booked_seats.into_iter().collect(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SKYSEAT__SERVER__PORT=9090`
            .add_source(config::Environment::with_prefix("SKYSEAT").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
