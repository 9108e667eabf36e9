use serde::Serialize;
use std::ops::RangeInclusive;

/// Seat column letters in left-to-right cabin order. `I` is skipped so it is
/// never mistaken for row `1`.
pub const SEAT_ALPHABET: &str = "ABCDEFGHJK";

/// Immutable cabin geometry of one airframe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AircraftLayout {
    registration: String,
    model: String,
    num_rows: u32,
    seat_letters: &'static str,
}

impl AircraftLayout {
    /// Build a layout with rows `1..=num_rows` and the first `seats_per_row`
    /// letters of [`SEAT_ALPHABET`].
    pub fn new(
        registration: impl Into<String>,
        model: impl Into<String>,
        num_rows: u32,
        seats_per_row: usize,
    ) -> Result<Self, LayoutError> {
        let registration = registration.into();

        if num_rows == 0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "{} must have at least one row",
                registration
            )));
        }

        if seats_per_row == 0 || seats_per_row > SEAT_ALPHABET.len() {
            return Err(LayoutError::InvalidConfiguration(format!(
                "{} requests {} seats per row, supported range is 1..={}",
                registration,
                seats_per_row,
                SEAT_ALPHABET.len()
            )));
        }

        Ok(Self::from_trusted(registration, model, num_rows, seats_per_row))
    }

    /// Caller guarantees `num_rows > 0` and `1 <= seats_per_row <= 10`.
    pub(crate) fn from_trusted(
        registration: String,
        model: impl Into<String>,
        num_rows: u32,
        seats_per_row: usize,
    ) -> Self {
        Self {
            registration,
            model: model.into(),
            num_rows,
            seat_letters: &SEAT_ALPHABET[..seats_per_row],
        }
    }

    pub fn registration(&self) -> &str {
        &self.registration
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Row numbers and seat letters of the cabin
    pub fn seating_plan(&self) -> (RangeInclusive<u32>, &'static str) {
        (self.rows(), self.seat_letters)
    }

    pub fn rows(&self) -> RangeInclusive<u32> {
        1..=self.num_rows
    }

    pub fn seat_letters(&self) -> &'static str {
        self.seat_letters
    }

    pub fn has_letter(&self, letter: char) -> bool {
        self.seat_letters.contains(letter)
    }

    pub fn num_seats(&self) -> usize {
        self.num_rows as usize * self.seat_letters.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid aircraft configuration: {0}")]
    InvalidConfiguration(String),
}
