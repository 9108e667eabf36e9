pub mod booking;
pub mod cards;
pub mod error;
pub mod flight_number;
pub mod manifest;
pub mod schedule;
pub mod seat;

pub use booking::FlightBooking;
pub use cards::{BoardingCard, CardEmitter};
pub use error::{BookingError, FlightNumberFault};
pub use flight_number::FlightNumber;
pub use manifest::{FlightManifest, SeatAssignment};
pub use schedule::{Schedule, ScheduleError};
pub use seat::SeatAddress;
