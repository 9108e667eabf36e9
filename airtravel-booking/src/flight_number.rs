use crate::error::{BookingError, FlightNumberFault};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const MAX_ROUTE_NUMBER: u32 = 9999;

/// A validated flight designator: two-letter uppercase airline code followed
/// by a route number of at most 9999, e.g. `BA758`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FlightNumber(String);

impl FlightNumber {
    pub fn parse(number: &str) -> Result<Self, BookingError> {
        let code: Vec<char> = number.chars().take(2).collect();

        if code.is_empty() || !code.iter().all(|c| c.is_alphabetic()) {
            return Err(BookingError::flight_number(number, FlightNumberFault::NoAirlineCode));
        }

        let has_upper = code.iter().any(|c| c.is_uppercase());
        let has_lower = code.iter().any(|c| c.is_lowercase());
        if !has_upper || has_lower {
            return Err(BookingError::flight_number(number, FlightNumberFault::InvalidAirlineCode));
        }

        let route = &number[code_len(number)..];
        let valid_route = !route.is_empty()
            && route.bytes().all(|b| b.is_ascii_digit())
            && route.parse::<u32>().is_ok_and(|n| n <= MAX_ROUTE_NUMBER);

        if !valid_route {
            return Err(BookingError::flight_number(number, FlightNumberFault::InvalidRouteNumber));
        }

        Ok(Self(number.to_string()))
    }

    /// Two-letter airline code
    pub fn airline(&self) -> &str {
        &self.0[..code_len(&self.0)]
    }

    pub fn route(&self) -> u32 {
        self.0[code_len(&self.0)..].parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Byte length of the first two characters
fn code_len(number: &str) -> usize {
    number
        .char_indices()
        .nth(2)
        .map(|(i, _)| i)
        .unwrap_or(number.len())
}

impl FromStr for FlightNumber {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FlightNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
