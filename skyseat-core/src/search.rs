use chrono::NaiveDate;
use serde::Deserialize;

use crate::flight::Flight;

/// Catalog filter criteria; unset fields match everything
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FlightFilter {
    /// Case-insensitive substring of the destination
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    /// Upper bound on the economy fare, minor units
    pub max_price: Option<i32>,
    pub max_duration_hours: Option<u32>,
}

impl FlightFilter {
    pub fn matches(&self, flight: &Flight) -> bool {
        if let Some(destination) = self.destination.as_deref().filter(|d| !d.is_empty()) {
            if !flight
                .destination
                .to_lowercase()
                .contains(&destination.to_lowercase())
            {
                return false;
            }
        }

        if let Some(date) = self.date {
            if flight.flight_date != date {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if flight.economy_price > max_price {
                return false;
            }
        }

        if let Some(hours) = self.max_duration_hours {
            if flight.duration_minutes() > hours.saturating_mul(60) {
                return false;
            }
        }

        true
    }

    /// Matching flights in catalog order
    pub fn apply(&self, flights: &[Flight]) -> Vec<Flight> {
        flights.iter().filter(|f| self.matches(f)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: i64, destination: &str, date: &str, price: i32, duration: &str) -> Flight {
        Flight {
            id,
            departure: "Tallinn".to_string(),
            destination: destination.to_string(),
            flight_date: date.parse().unwrap(),
            flight_duration: duration.to_string(),
            stopover: None,
            economy_price: price,
            business_price: price * 3,
            booked_seats: Default::default(),
        }
    }

    fn catalog() -> Vec<Flight> {
        vec![
            flight(1, "Los Angeles", "2025-03-13", 10000, "5h 30m"),
            flight(2, "Paris", "2025-04-15", 12000, "2h 10m"),
            flight(3, "Sydney", "2025-05-20", 15000, "9h 45m"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let flights = catalog();
        assert_eq!(FlightFilter::default().apply(&flights), flights);
    }

    #[test]
    fn test_destination_is_case_insensitive() {
        let filter = FlightFilter {
            destination: Some("pAR".to_string()),
            ..Default::default()
        };
        let ids: Vec<i64> = filter.apply(&catalog()).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_date_and_price() {
        let by_date = FlightFilter {
            date: NaiveDate::from_ymd_opt(2025, 5, 20),
            ..Default::default()
        };
        assert_eq!(by_date.apply(&catalog())[0].id, 3);

        let by_price = FlightFilter {
            max_price: Some(12000),
            ..Default::default()
        };
        let ids: Vec<i64> = by_price.apply(&catalog()).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_max_duration_in_hours() {
        let filter = FlightFilter {
            max_duration_hours: Some(6),
            ..Default::default()
        };
        let ids: Vec<i64> = filter.apply(&catalog()).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_huge_max_duration_keeps_everything() {
        let filter = FlightFilter {
            max_duration_hours: Some(71_582_789),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog()).len(), 3);

        let filter = FlightFilter {
            max_duration_hours: Some(u32::MAX),
            ..Default::default()
        };
        assert_eq!(filter.apply(&catalog()).len(), 3);
    }

    #[test]
    fn test_criteria_combine() {
        let filter = FlightFilter {
            destination: Some("s".to_string()),
            max_duration_hours: Some(6),
            ..Default::default()
        };
        let ids: Vec<i64> = filter.apply(&catalog()).iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
