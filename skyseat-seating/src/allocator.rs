use serde::{Deserialize, Serialize};

use crate::seat_map::{SeatMap, SeatPreference};
use crate::{Occupancy, SeatNumber};

/// What the traveler asks for
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PreferenceRequest {
    pub party_size: u32,
    #[serde(default)]
    pub want_window: bool,
    #[serde(default)]
    pub want_legroom: bool,
    #[serde(default)]
    pub want_exit_proximity: bool,
}

impl PreferenceRequest {
    pub fn new(party_size: u32) -> Self {
        Self {
            party_size,
            ..Self::default()
        }
    }

    pub fn with(mut self, preference: SeatPreference) -> Self {
        match preference {
            SeatPreference::Window => self.want_window = true,
            SeatPreference::ExtraLegroom => self.want_legroom = true,
            SeatPreference::ExitProximity => self.want_exit_proximity = true,
        }
        self
    }

    pub fn wants(&self, preference: SeatPreference) -> bool {
        match preference {
            SeatPreference::Window => self.want_window,
            SeatPreference::ExtraLegroom => self.want_legroom,
            SeatPreference::ExitProximity => self.want_exit_proximity,
        }
    }

    pub fn requested(&self) -> impl Iterator<Item = SeatPreference> + '_ {
        SeatPreference::ALL.into_iter().filter(|&p| self.wants(p))
    }

    pub fn has_preferences(&self) -> bool {
        self.requested().next().is_some()
    }
}

/// Which rung of the fallback ladder produced a recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStrategy {
    /// Every seat matches at least one requested preference
    PreferenceMatch,
    /// Preferred seats ran out, the rest were filled with plain seats
    DegradedPreference,
    /// No preferences, one block of consecutive seat numbers
    ContiguousRun,
    /// No preferences and no block long enough, lowest free seats
    LowestAvailable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Seats in the order they were picked
    pub seats: Vec<SeatNumber>,
    pub strategy: AllocationStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("not enough seats available")]
    Capacity {
        requested: u32,
        available: u32,
    },
}

/// Seat recommendation engine for one seat map.
///
/// Stateless: every call is a pure function of the seat map, the occupancy
/// snapshot and the request, so one allocator can be shared across threads.
#[derive(Debug, Clone)]
pub struct SeatAllocator {
    seat_map: SeatMap,
}

impl SeatAllocator {
    pub fn new(seat_map: SeatMap) -> Self {
        Self { seat_map }
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    pub fn recommend(
        &self,
        occupancy: &Occupancy,
        request: &PreferenceRequest,
    ) -> Result<Recommendation, AllocationError> {
        recommend(&self.seat_map, occupancy, request)
    }
}

/// Pick `request.party_size` free seats.
///
/// Capacity is checked before anything else so that an impossible request is
/// never answered with a partial recommendation.
pub fn recommend(
    seat_map: &SeatMap,
    occupancy: &Occupancy,
    request: &PreferenceRequest,
) -> Result<Recommendation, AllocationError> {
    let available = seat_map.available(occupancy);
    let party_size = request.party_size as usize;

    if available.len() < party_size {
        return Err(AllocationError::Capacity {
            requested: request.party_size,
            available: available.len() as u32,
        });
    }

    if request.has_preferences() {
        Ok(by_preference(seat_map, &available, request, party_size))
    } else {
        Ok(contiguous_or_lowest(&available, party_size))
    }
}

fn contiguous_or_lowest(available: &[SeatNumber], party_size: usize) -> Recommendation {
    match first_contiguous_run(available, party_size) {
        Some(run) => Recommendation {
            seats: run.to_vec(),
            strategy: AllocationStrategy::ContiguousRun,
        },
        None => Recommendation {
            seats: available[..party_size].to_vec(),
            strategy: AllocationStrategy::LowestAvailable,
        },
    }
}

/// First window of `len` available seats whose numbers are consecutive.
/// `available` is strictly ascending, so a window is consecutive exactly
/// when its ends are `len - 1` apart.
fn first_contiguous_run(available: &[SeatNumber], len: usize) -> Option<&[SeatNumber]> {
    if len == 0 {
        return Some(&available[..0]);
    }

    available
        .windows(len)
        .find(|run| run[len - 1] - run[0] == (len - 1) as SeatNumber)
}

fn by_preference(
    seat_map: &SeatMap,
    available: &[SeatNumber],
    request: &PreferenceRequest,
    party_size: usize,
) -> Recommendation {
    let wanted: Vec<SeatPreference> = request.requested().collect();

    // buckets[n] holds the free seats matching exactly n requested preferences
    let mut buckets: Vec<Vec<SeatNumber>> = vec![Vec::new(); SeatPreference::ALL.len() + 1];
    for &seat in available {
        let match_count = wanted.iter().filter(|&&p| seat_map.matches(seat, p)).count();
        buckets[match_count].push(seat);
    }

    let mut seats: Vec<SeatNumber> = buckets[1..]
        .iter()
        .rev()
        .flatten()
        .copied()
        .take(party_size)
        .collect();

    if seats.len() == party_size {
        return Recommendation {
            seats,
            strategy: AllocationStrategy::PreferenceMatch,
        };
    }

    let shortfall = party_size - seats.len();
    seats.extend(buckets[0].iter().take(shortfall));

    Recommendation {
        seats,
        strategy: AllocationStrategy::DegradedPreference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booked(seats: impl IntoIterator<Item = SeatNumber>) -> Occupancy {
        seats.into_iter().collect()
    }

    #[test]
    fn test_lowest_contiguous_run_on_empty_flight() {
        let allocator = SeatAllocator::new(SeatMap::standard());

        let rec = allocator.recommend(&Occupancy::new(), &PreferenceRequest::new(3)).unwrap();
        assert_eq!(rec.seats, vec![1, 2, 3]);
        assert_eq!(rec.strategy, AllocationStrategy::ContiguousRun);
    }

    #[test]
    fn test_contiguous_run_skips_gaps() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        let occupancy = booked([2, 5, 6]);

        let rec = allocator.recommend(&occupancy, &PreferenceRequest::new(3)).unwrap();
        assert_eq!(rec.seats, vec![7, 8, 9]);
    }

    #[test]
    fn test_lowest_available_when_no_run_fits() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        // every even seat booked: no two free seats are adjacent
        let occupancy = booked((2..=60).step_by(2));

        let rec = allocator.recommend(&occupancy, &PreferenceRequest::new(2)).unwrap();
        assert_eq!(rec.seats, vec![1, 3]);
        assert_eq!(rec.strategy, AllocationStrategy::LowestAvailable);
    }

    #[test]
    fn test_capacity_error() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        let occupancy = booked(1..=59);

        let err = allocator.recommend(&occupancy, &PreferenceRequest::new(2)).unwrap_err();
        assert_eq!(err, AllocationError::Capacity { requested: 2, available: 1 });
        assert_eq!(err.to_string(), "not enough seats available");
    }

    #[test]
    fn test_capacity_checked_before_preferences() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        let occupancy = booked(1..=60);
        let request = PreferenceRequest::new(1).with(SeatPreference::Window);

        assert!(matches!(
            allocator.recommend(&occupancy, &request),
            Err(AllocationError::Capacity { requested: 1, available: 0 })
        ));
    }

    #[test]
    fn test_exact_capacity_is_enough() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        let occupancy = booked(1..=58);

        let rec = allocator.recommend(&occupancy, &PreferenceRequest::new(2)).unwrap();
        assert_eq!(rec.seats, vec![59, 60]);
    }

    #[test]
    fn test_highest_match_count_first() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        let request = PreferenceRequest::new(4)
            .with(SeatPreference::Window)
            .with(SeatPreference::ExtraLegroom)
            .with(SeatPreference::ExitProximity);

        let rec = allocator.recommend(&Occupancy::new(), &request).unwrap();
        // 3 matches: 1, 4, 29, 32 (window + legroom + exit)
        assert_eq!(rec.seats, vec![1, 4, 29, 32]);
        assert_eq!(rec.strategy, AllocationStrategy::PreferenceMatch);
    }

    #[test]
    fn test_buckets_drain_in_order() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        let request = PreferenceRequest::new(7)
            .with(SeatPreference::Window)
            .with(SeatPreference::ExitProximity);

        let rec = allocator.recommend(&Occupancy::new(), &request).unwrap();
        // 2 matches: 1, 4, 29, 32, 57, 60; then the lowest 1-match seat
        assert_eq!(rec.seats, vec![1, 4, 29, 32, 57, 60, 2]);
    }

    #[test]
    fn test_degraded_when_preferred_seats_are_taken() {
        let map = SeatMap::standard();
        let allocator = SeatAllocator::new(map.clone());
        let occupancy: Occupancy = map.preference_seats(SeatPreference::Window).clone();
        let request = PreferenceRequest::new(2).with(SeatPreference::Window);

        let rec = allocator.recommend(&occupancy, &request).unwrap();
        assert_eq!(rec.seats, vec![2, 3]);
        assert_eq!(rec.strategy, AllocationStrategy::DegradedPreference);
    }

    #[test]
    fn test_front_cabin_booked_with_window_request() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        let occupancy = booked(1..=12);
        let request = PreferenceRequest::new(2).with(SeatPreference::Window);

        let rec = allocator.recommend(&occupancy, &request).unwrap();
        assert_eq!(rec.seats, vec![13, 16]);
    }

    #[test]
    fn test_partial_preference_match_is_topped_up() {
        let allocator = SeatAllocator::new(SeatMap::standard());
        // leave only seat 32 free among legroom seats
        let occupancy = booked((1..=12).chain(29..=31));
        let request = PreferenceRequest::new(3).with(SeatPreference::ExtraLegroom);

        let rec = allocator.recommend(&occupancy, &request).unwrap();
        assert_eq!(rec.seats, vec![32, 13, 14]);
        assert_eq!(rec.strategy, AllocationStrategy::DegradedPreference);
    }

    #[test]
    fn test_preference_sets_may_be_empty() {
        let config = crate::SeatMapConfig {
            seat_count: 8,
            row_width: 4,
            business_zone: crate::seat_map::BusinessZone { first: 1, last: 4 },
            window_seats: Default::default(),
            extra_legroom_seats: Default::default(),
            exit_proximity_seats: Default::default(),
        };
        let allocator = SeatAllocator::new(SeatMap::try_from(config).unwrap());
        let request = PreferenceRequest::new(8).with(SeatPreference::Window);

        let rec = allocator.recommend(&Occupancy::new(), &request).unwrap();
        assert_eq!(rec.seats, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_party_size() {
        let allocator = SeatAllocator::new(SeatMap::standard());

        let rec = allocator.recommend(&Occupancy::new(), &PreferenceRequest::new(0)).unwrap();
        assert!(rec.seats.is_empty());
    }

    #[test]
    fn test_request_json_defaults() {
        let request: PreferenceRequest = serde_json::from_str(r#"{"party_size": 2, "want_window": true}"#).unwrap();
        assert_eq!(request, PreferenceRequest::new(2).with(SeatPreference::Window));
        assert_eq!(request.requested().collect::<Vec<_>>(), vec![SeatPreference::Window]);
    }
}
