use crate::pii::Masked;
use serde::{Deserialize, Serialize};

/// Something that happened to a seat on a flight.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatEvent {
    SeatAllocated(SeatAllocatedEvent),
    PassengerRelocated(PassengerRelocatedEvent),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeatAllocatedEvent {
    pub flight_number: String,
    pub seat: String,
    pub passenger: Masked<String>,
    pub allocated_at: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PassengerRelocatedEvent {
    pub flight_number: String,
    pub from_seat: String,
    pub to_seat: String,
    pub passenger: Masked<String>,
    pub relocated_at: i64,
}

impl SeatEvent {
    pub fn allocated(flight_number: &str, seat: &str, passenger: &str) -> Self {
        SeatEvent::SeatAllocated(SeatAllocatedEvent {
            flight_number: flight_number.to_string(),
            seat: seat.to_string(),
            passenger: Masked::from(passenger),
            allocated_at: chrono::Utc::now().timestamp(),
        })
    }

    pub fn relocated(flight_number: &str, from_seat: &str, to_seat: &str, passenger: &str) -> Self {
        SeatEvent::PassengerRelocated(PassengerRelocatedEvent {
            flight_number: flight_number.to_string(),
            from_seat: from_seat.to_string(),
            to_seat: to_seat.to_string(),
            passenger: Masked::from(passenger),
            relocated_at: chrono::Utc::now().timestamp(),
        })
    }

    pub fn flight_number(&self) -> &str {
        match self {
            SeatEvent::SeatAllocated(e) => &e.flight_number,
            SeatEvent::PassengerRelocated(e) => &e.flight_number,
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            SeatEvent::SeatAllocated(e) => e.allocated_at,
            SeatEvent::PassengerRelocated(e) => e.relocated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = SeatEvent::relocated("BA758", "12A", "12B", "Hrishi");
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "PASSENGER_RELOCATED");
        assert_eq!(value["from_seat"], "12A");
        assert_eq!(value["to_seat"], "12B");
        assert_eq!(value["passenger"], "Hrishi");
        assert_eq!(event.flight_number(), "BA758");
        assert!(event.timestamp() > 0);
    }

    #[test]
    fn test_event_debug_masks_passenger() {
        let event = SeatEvent::allocated("BA758", "12A", "Hrishi");
        assert!(!format!("{:?}", event).contains("Hrishi"));
    }
}
