use airtravel_fleet::LayoutError;
use std::fmt;

/// Which flight-number rule was broken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightNumberFault {
    NoAirlineCode,
    InvalidAirlineCode,
    InvalidRouteNumber,
}

impl fmt::Display for FlightNumberFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FlightNumberFault::NoAirlineCode => "no airline code",
            FlightNumberFault::InvalidAirlineCode => "invalid airline code",
            FlightNumberFault::InvalidRouteNumber => "invalid route number",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid flight number '{number}': {reason}")]
    InvalidFlightNumber {
        number: String,
        reason: FlightNumberFault,
    },

    #[error(transparent)]
    InvalidConfiguration(#[from] LayoutError),

    #[error("Invalid seat letter '{0}'")]
    InvalidSeatLetter(String),

    #[error("Invalid seat row '{0}'")]
    InvalidSeatRow(String),

    #[error("Invalid row number {0}")]
    InvalidRowNumber(String),

    #[error("Seat {0} is already occupied")]
    SeatOccupied(String),

    #[error("No passenger to relocate in seat {0}")]
    EmptySeat(String),
}

impl BookingError {
    pub(crate) fn flight_number(number: &str, reason: FlightNumberFault) -> Self {
        BookingError::InvalidFlightNumber {
            number: number.to_string(),
            reason,
        }
    }
}
