use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skyseat_core::repository::FlightCatalog;
use skyseat_core::{CoreError, CoreResult, Flight};
use skyseat_seating::{Occupancy, SeatNumber};
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::app_config::Config;

/// Random occupancy for demo flights that nobody has booked yet
pub struct OccupancySeeder {
    seat_count: u32,
    rng: StdRng,
}

impl OccupancySeeder {
    /// A fixed `seed` makes the drawn occupancies reproducible
    pub fn new(seat_count: u32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { seat_count, rng }
    }

    /// Between one and `seat_count` distinct booked seats
    pub fn draw(&mut self) -> Occupancy {
        if self.seat_count == 0 {
            return Occupancy::new();
        }

        let count = self.rng.gen_range(1..=self.seat_count);
        rand::seq::index::sample(&mut self.rng, self.seat_count as usize, count as usize)
            .into_iter()
            .map(|i| i as SeatNumber + 1)
            .collect()
    }
}

/// Flight catalog held in memory
pub struct InMemoryFlightCatalog {
    flights: RwLock<BTreeMap<i64, Flight>>,
    seeder: Option<Mutex<OccupancySeeder>>,
}

impl InMemoryFlightCatalog {
    pub fn new(flights: Vec<Flight>) -> Self {
        Self {
            flights: RwLock::new(flights.into_iter().map(|f| (f.id, f)).collect()),
            seeder: None,
        }
    }

    pub fn with_occupancy_seeding(mut self, seeder: OccupancySeeder) -> Self {
        self.seeder = Some(Mutex::new(seeder));
        self
    }

    /// Fails on duplicate flight ids or booked seats outside the seat map
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let flights: Vec<Flight> = config.catalog.flights.iter().cloned().map(Flight::from).collect();

        let mut ids = BTreeSet::new();
        for flight in &flights {
            if !ids.insert(flight.id) {
                return Err(CoreError::ValidationError(format!("duplicate flight id {}", flight.id)));
            }
            if let Some(seat) = flight.booked_seats.iter().find(|&&s| !config.seat_map.contains(s)) {
                return Err(CoreError::ValidationError(format!(
                    "flight {} books seat {} outside 1-{}",
                    flight.id,
                    seat,
                    config.seat_map.seat_count()
                )));
            }
        }
        info!("Loaded {} flights into catalog", flights.len());

        let catalog = Self::new(flights);
        if config.catalog.seed_occupancy {
            Ok(catalog.with_occupancy_seeding(OccupancySeeder::new(
                config.seat_map.seat_count(),
                config.catalog.rng_seed,
            )))
        } else {
            Ok(catalog)
        }
    }
}

#[async_trait]
impl FlightCatalog for InMemoryFlightCatalog {
    async fn list_flights(&self) -> CoreResult<Vec<Flight>> {
        Ok(self.flights.read().await.values().cloned().collect())
    }

    async fn get_flight(&self, id: i64) -> CoreResult<Option<Flight>> {
        let current = self.flights.read().await.get(&id).cloned();
        let Some(seeder) = &self.seeder else {
            return Ok(current);
        };
        match current {
            Some(flight) if flight.booked_seats.is_empty() => {}
            other => return Ok(other),
        }

        // another request may have seeded it in between
        let mut flights = self.flights.write().await;
        let Some(flight) = flights.get_mut(&id) else {
            return Ok(None);
        };

        if flight.booked_seats.is_empty() {
            flight.booked_seats = seeder.lock().await.draw();
            info!("Seeded {} booked seats for flight {}", flight.booked_seats.len(), id);
        }

        Ok(Some(flight.clone()))
    }
}
