use crate::booking::FlightBooking;
use crate::error::BookingError;
use std::collections::BTreeMap;
use tracing::info;

/// Bookings for several flights, keyed by flight number
#[derive(Debug)]
pub struct Schedule {
    flights: BTreeMap<String, FlightBooking>,
}

impl Schedule {
    pub fn new() -> Self {
        Self {
            flights: BTreeMap::new(),
        }
    }

    /// Register a booking; flight numbers are unique within a schedule
    pub fn open_flight(&mut self, booking: FlightBooking) -> Result<&mut FlightBooking, ScheduleError> {
        let number = booking.number().to_string();

        if self.flights.contains_key(&number) {
            return Err(ScheduleError::DuplicateFlight(number));
        }

        info!("Scheduled flight {} on {}", number, booking.registration());
        Ok(self.flights.entry(number).or_insert(booking))
    }

    pub fn get_flight(&self, number: &str) -> Option<&FlightBooking> {
        self.flights.get(number)
    }

    pub fn allocate_seat(&mut self, number: &str, seat: &str, passenger: &str) -> Result<(), ScheduleError> {
        self.get_flight_mut(number)?.allocate_seat(seat, passenger)?;
        Ok(())
    }

    pub fn relocate_passenger(&mut self, number: &str, from_seat: &str, to_seat: &str) -> Result<(), ScheduleError> {
        self.get_flight_mut(number)?.relocate_passenger(from_seat, to_seat)?;
        Ok(())
    }

    /// Flights in flight-number order
    pub fn flights(&self) -> impl Iterator<Item = &FlightBooking> {
        self.flights.values()
    }

    pub fn total_available_seats(&self) -> usize {
        self.flights.values().map(FlightBooking::num_available_seats).sum()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    fn get_flight_mut(&mut self, number: &str) -> Result<&mut FlightBooking, ScheduleError> {
        self.flights
            .get_mut(number)
            .ok_or_else(|| ScheduleError::FlightNotFound(number.to_string()))
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Flight already scheduled: {0}")]
    DuplicateFlight(String),

    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use airtravel_fleet::AircraftLayout;

    fn schedule() -> Schedule {
        let mut schedule = Schedule::new();
        schedule
            .open_flight(FlightBooking::new("BA758", AircraftLayout::airbus_a319("G-EUPT")).unwrap())
            .unwrap();
        schedule
            .open_flight(FlightBooking::new("AF72", AircraftLayout::boeing_777("F-GSPS")).unwrap())
            .unwrap();
        schedule
    }

    #[test]
    fn test_open_flights() {
        let schedule = schedule();

        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.total_available_seats(), 132 + 550);

        let numbers: Vec<&str> = schedule.flights().map(|f| f.number()).collect();
        assert_eq!(numbers, vec!["AF72", "BA758"]);
    }

    #[test]
    fn test_duplicate_flight() {
        let mut schedule = schedule();
        let again = FlightBooking::new("BA758", AircraftLayout::airbus_a319("G-EUAH")).unwrap();

        let result = schedule.open_flight(again);

        assert!(matches!(result, Err(ScheduleError::DuplicateFlight(n)) if n == "BA758"));
        assert_eq!(schedule.get_flight("BA758").unwrap().registration(), "G-EUPT");
    }

    #[test]
    fn test_seat_operations_by_flight() {
        let mut schedule = schedule();

        schedule.allocate_seat("BA758", "12A", "Hrishi").unwrap();
        schedule.relocate_passenger("BA758", "12A", "12B").unwrap();

        let flight = schedule.get_flight("BA758").unwrap();
        assert_eq!(flight.passenger_at("12B").unwrap(), Some("Hrishi"));
        assert_eq!(schedule.total_available_seats(), 132 + 550 - 1);
    }

    #[test]
    fn test_debug_lists_flights() {
        let schedule = schedule();
        let text = format!("{:?}", schedule);

        assert!(text.contains("BA758"));
        assert!(text.contains("AF72"));
    }

    #[test]
    fn test_unknown_flight() {
        let mut schedule = schedule();

        let result = schedule.allocate_seat("LH400", "1A", "Mike");

        assert_eq!(result, Err(ScheduleError::FlightNotFound("LH400".to_string())));
    }

    #[test]
    fn test_booking_errors_pass_through() {
        let mut schedule = schedule();
        schedule.allocate_seat("BA758", "1A", "Mike").unwrap();

        let result = schedule.allocate_seat("BA758", "1A", "Harvey");

        assert_eq!(
            result,
            Err(ScheduleError::Booking(BookingError::SeatOccupied("1A".to_string())))
        );
    }
}
