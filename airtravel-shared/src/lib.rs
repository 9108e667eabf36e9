pub mod models;
pub mod pii;

pub use models::events::SeatEvent;
pub use pii::Masked;
