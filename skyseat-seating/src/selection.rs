use serde::{Deserialize, Serialize};

use crate::{Occupancy, SeatNumber};

/// Seats the traveler picked by hand, in the order they were picked.
///
/// Never contains a booked seat: every mutation goes through `toggle`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSelection {
    seats: Vec<SeatNumber>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a free seat. Booked seats are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn toggle(&mut self, seat: SeatNumber, occupancy: &Occupancy) -> bool {
        if occupancy.contains(&seat) {
            return false;
        }

        match self.seats.iter().position(|&s| s == seat) {
            Some(index) => {
                self.seats.remove(index);
            }
            None => self.seats.push(seat),
        }
        true
    }

    /// Drop every seat, e.g. after a fresh recommendation
    pub fn clear(&mut self) {
        self.seats.clear();
    }

    pub fn contains(&self, seat: SeatNumber) -> bool {
        self.seats.contains(&seat)
    }

    pub fn seats(&self) -> &[SeatNumber] {
        &self.seats
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

/// Non-mutating form of [`SeatSelection::toggle`]
pub fn toggle_seat(selection: &SeatSelection, seat: SeatNumber, occupancy: &Occupancy) -> SeatSelection {
    let mut next = selection.clone();
    next.toggle(seat, occupancy);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_and_removes() {
        let occupancy = Occupancy::new();
        let mut selection = SeatSelection::new();

        assert!(selection.toggle(14, &occupancy));
        assert!(selection.toggle(3, &occupancy));
        assert_eq!(selection.seats(), &[14, 3]);

        assert!(selection.toggle(14, &occupancy));
        assert_eq!(selection.seats(), &[3]);
    }

    #[test]
    fn test_toggle_booked_seat_is_noop() {
        let occupancy: Occupancy = [5, 6].into_iter().collect();
        let mut selection = SeatSelection::new();
        selection.toggle(7, &occupancy);

        let before = selection.clone();
        assert!(!selection.toggle(5, &occupancy));
        assert_eq!(selection, before);
        assert_eq!(toggle_seat(&selection, 6, &occupancy), before);
    }

    #[test]
    fn test_toggle_seat_leaves_input_untouched() {
        let occupancy = Occupancy::new();
        let selection = SeatSelection::new();

        let next = toggle_seat(&selection, 9, &occupancy);
        assert!(selection.is_empty());
        assert!(next.contains(9));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn test_no_upper_bound() {
        let occupancy = Occupancy::new();
        let mut selection = SeatSelection::new();
        for seat in 1..=60 {
            selection.toggle(seat, &occupancy);
        }
        assert_eq!(selection.len(), 60);

        selection.clear();
        assert!(selection.is_empty());
    }
}
