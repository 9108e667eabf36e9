use airtravel_shared::SeatEvent;
use serde::Serialize;

/// Point-in-time view of a flight, for reports and JSON output
#[derive(Debug, Clone, Serialize)]
pub struct FlightManifest {
    pub flight_number: String,
    pub airline: String,
    pub aircraft_model: String,
    pub registration: String,
    pub total_seats: usize,
    pub available_seats: usize,
    /// Sorted by passenger name
    pub assignments: Vec<SeatAssignment>,
    pub history: Vec<SeatEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatAssignment {
    pub seat: String,
    pub passenger: String,
}

impl FlightManifest {
    pub fn occupied_seats(&self) -> usize {
        self.total_seats - self.available_seats
    }

    /// Share of seats taken, 0.0 to 1.0
    pub fn load_factor(&self) -> f64 {
        if self.total_seats == 0 {
            0.0
        } else {
            self.occupied_seats() as f64 / self.total_seats as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FlightBooking;
    use airtravel_fleet::AircraftLayout;

    #[test]
    fn test_manifest_snapshot() {
        let mut booking =
            FlightBooking::new("AF72", AircraftLayout::boeing_777("F-GSPS")).unwrap();
        booking.allocate_seat("55K", "Guido").unwrap();
        booking.allocate_seat("33G", "Rasmus").unwrap();

        let manifest = booking.manifest();

        assert_eq!(manifest.airline, "AF");
        assert_eq!(manifest.total_seats, 550);
        assert_eq!(manifest.available_seats, 548);
        assert_eq!(manifest.occupied_seats(), 2);
        assert!((manifest.load_factor() - 2.0 / 550.0).abs() < 1e-9);
        assert_eq!(manifest.assignments[0].passenger, "Guido");
        assert_eq!(manifest.assignments[1].seat, "33G");

        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["registration"], "F-GSPS");
        assert_eq!(json["history"][0]["type"], "SEAT_ALLOCATED");
    }
}
