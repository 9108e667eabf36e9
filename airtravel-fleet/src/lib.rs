pub mod layout;
pub mod preset;

pub use layout::{AircraftLayout, LayoutError, SEAT_ALPHABET};
pub use preset::{AircraftType, LayoutSpec};
