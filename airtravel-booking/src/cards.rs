use serde::Serialize;

/// Everything printed on one boarding pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardingCard {
    pub passenger: String,
    pub seat: String,
    pub flight_number: String,
    pub aircraft_model: String,
}

/// Receives one call per occupied seat, in passenger-name order.
///
/// Any `FnMut(&str, &str, &str, &str)` taking
/// `(passenger, seat, flight_number, aircraft_model)` is an emitter.
pub trait CardEmitter {
    fn emit(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str);
}

impl<F> CardEmitter for F
where
    F: FnMut(&str, &str, &str, &str),
{
    fn emit(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        self(passenger, seat, flight_number, aircraft_model)
    }
}

impl BoardingCard {
    pub fn emit_to<E: CardEmitter + ?Sized>(&self, emitter: &mut E) {
        emitter.emit(
            &self.passenger,
            &self.seat,
            &self.flight_number,
            &self.aircraft_model,
        );
    }
}
