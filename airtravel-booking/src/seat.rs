use crate::error::BookingError;
use airtravel_fleet::AircraftLayout;
use serde::{Serialize, Serializer};
use std::fmt;

/// A (row, letter) slot known to exist in some layout, written `12A`.
///
/// Ordering is row first, then letter, which is cabin order because layout
/// letters are always a prefix of the seat alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatAddress {
    row: u32,
    letter: char,
}

impl SeatAddress {
    /// Parse `<row><letter>` against `layout`.
    ///
    /// Checks run in a fixed order: the trailing letter, then that the row
    /// prefix is an integer, then that the row is inside the cabin.
    pub fn parse(text: &str, layout: &AircraftLayout) -> Result<Self, BookingError> {
        let mut chars = text.chars();
        let letter = chars
            .next_back()
            .ok_or_else(|| BookingError::InvalidSeatLetter(String::new()))?;

        if !layout.has_letter(letter) {
            return Err(BookingError::InvalidSeatLetter(letter.to_string()));
        }

        let row_text = chars.as_str();
        let row_number = row_text.trim();
        let digits = row_number
            .strip_prefix(&['+', '-'][..])
            .unwrap_or(row_number);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookingError::InvalidSeatRow(row_text.to_string()));
        }

        // Any integer is a row number here, however many digits it has
        let row = row_number
            .parse::<u32>()
            .ok()
            .filter(|r| layout.rows().contains(r))
            .ok_or_else(|| BookingError::InvalidRowNumber(row_number.to_string()))?;

        Ok(Self { row, letter })
    }

    pub(crate) fn new(row: u32, letter: char) -> Self {
        Self { row, letter }
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn letter(&self) -> char {
        self.letter
    }
}

impl fmt::Display for SeatAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

impl Serialize for SeatAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
