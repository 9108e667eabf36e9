use crate::cards::{BoardingCard, CardEmitter};
use crate::error::BookingError;
use crate::flight_number::FlightNumber;
use crate::manifest::{FlightManifest, SeatAssignment};
use crate::seat::SeatAddress;
use airtravel_fleet::{AircraftLayout, LayoutSpec};
use airtravel_shared::{Masked, SeatEvent};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Seat occupancy for one flight on one aircraft.
///
/// The grid holds exactly one slot per (row, letter) of the layout, created
/// empty at construction. Failed operations leave it untouched.
#[derive(Debug, Clone)]
pub struct FlightBooking {
    number: FlightNumber,
    layout: Arc<AircraftLayout>,
    seating: BTreeMap<u32, HashMap<char, Option<String>>>,
    history: Vec<SeatEvent>,
}

impl FlightBooking {
    pub fn new(number: &str, layout: impl Into<Arc<AircraftLayout>>) -> Result<Self, BookingError> {
        let number = FlightNumber::parse(number)?;
        let layout = layout.into();

        let (rows, letters) = layout.seating_plan();
        let seating: BTreeMap<u32, HashMap<char, Option<String>>> = rows
            .map(|row| (row, letters.chars().map(|letter| (letter, None)).collect()))
            .collect();

        info!(
            "Opened flight {} on {} ({}), {} seats",
            number,
            layout.registration(),
            layout.model(),
            layout.num_seats()
        );

        Ok(Self {
            number,
            layout,
            seating,
            history: Vec::new(),
        })
    }

    /// Build the aircraft from `spec` and open a flight on it
    pub fn from_layout_spec(number: &str, spec: &LayoutSpec) -> Result<Self, BookingError> {
        let layout = spec.build()?;
        Self::new(number, layout)
    }

    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    pub fn flight_number(&self) -> &FlightNumber {
        &self.number
    }

    pub fn airline(&self) -> &str {
        self.number.airline()
    }

    pub fn aircraft_model(&self) -> &str {
        self.layout.model()
    }

    pub fn registration(&self) -> &str {
        self.layout.registration()
    }

    pub fn layout(&self) -> &Arc<AircraftLayout> {
        &self.layout
    }

    /// Resolve a seat address against this flight's aircraft
    pub fn parse_seat(&self, seat: &str) -> Result<SeatAddress, BookingError> {
        SeatAddress::parse(seat, &self.layout)
    }

    /// Put `passenger` in the empty seat `seat`
    pub fn allocate_seat(&mut self, seat: &str, passenger: impl Into<String>) -> Result<(), BookingError> {
        let result = self.try_allocate(seat, passenger.into());
        if let Err(e) = &result {
            warn!("Allocation on {} rejected: {}", self.number, e);
        }
        result
    }

    fn try_allocate(&mut self, seat: &str, passenger: String) -> Result<(), BookingError> {
        let address = self.parse_seat(seat)?;

        let slot = self.slot_mut(address)?;
        if slot.is_some() {
            return Err(BookingError::SeatOccupied(address.to_string()));
        }
        let passenger = slot.insert(passenger).clone();

        debug!(
            "Allocated {} on {} to {}",
            address,
            self.number,
            Masked(passenger.as_str())
        );
        self.history.push(SeatEvent::allocated(
            self.number.as_str(),
            &address.to_string(),
            &passenger,
        ));

        Ok(())
    }

    /// Move whoever sits in `from_seat` to the empty `to_seat`.
    ///
    /// Both addresses are validated before anything changes. Moving a
    /// passenger onto their own seat fails with [`BookingError::SeatOccupied`].
    pub fn relocate_passenger(&mut self, from_seat: &str, to_seat: &str) -> Result<(), BookingError> {
        let result = self.try_relocate(from_seat, to_seat);
        if let Err(e) = &result {
            warn!("Relocation on {} rejected: {}", self.number, e);
        }
        result
    }

    fn try_relocate(&mut self, from_seat: &str, to_seat: &str) -> Result<(), BookingError> {
        let from = self.parse_seat(from_seat)?;
        let to = self.parse_seat(to_seat)?;

        let Some(passenger) = self.occupant(from).map(str::to_string) else {
            return Err(BookingError::EmptySeat(from.to_string()));
        };

        if self.occupant(to).is_some() {
            return Err(BookingError::SeatOccupied(to.to_string()));
        }

        *self.slot_mut(to)? = self.slot_mut(from)?.take();

        debug!(
            "Relocated {} on {} from {} to {}",
            Masked(passenger.as_str()),
            self.number,
            from,
            to
        );
        self.history.push(SeatEvent::relocated(
            self.number.as_str(),
            &from.to_string(),
            &to.to_string(),
            &passenger,
        ));

        Ok(())
    }

    /// Who sits in `seat`, if anyone
    pub fn passenger_at(&self, seat: &str) -> Result<Option<&str>, BookingError> {
        let address = self.parse_seat(seat)?;
        Ok(self.occupant(address))
    }

    pub fn num_available_seats(&self) -> usize {
        self.seating
            .values()
            .flat_map(|row| row.values())
            .filter(|slot| slot.is_none())
            .count()
    }

    /// Occupied seats in cabin order: by row, then by the layout's letter order
    pub fn passenger_seats(&self) -> impl Iterator<Item = (&str, SeatAddress)> + '_ {
        let letters = self.layout.seat_letters();
        self.seating.iter().flat_map(move |(&row, slots)| {
            letters.chars().filter_map(move |letter| {
                slots
                    .get(&letter)
                    .and_then(|slot| slot.as_deref())
                    .map(|passenger| (passenger, SeatAddress::new(row, letter)))
            })
        })
    }

    /// One card per occupied seat, sorted by passenger name
    pub fn boarding_cards(&self) -> Vec<BoardingCard> {
        let mut cards: Vec<BoardingCard> = self
            .passenger_seats()
            .map(|(passenger, seat)| BoardingCard {
                passenger: passenger.to_string(),
                seat: seat.to_string(),
                flight_number: self.number.to_string(),
                aircraft_model: self.aircraft_model().to_string(),
            })
            .collect();
        cards.sort_by(|a, b| a.passenger.cmp(&b.passenger));
        cards
    }

    pub fn make_boarding_cards<E: CardEmitter + ?Sized>(&self, emitter: &mut E) {
        for card in self.boarding_cards() {
            card.emit_to(emitter);
        }
    }

    pub fn manifest(&self) -> FlightManifest {
        FlightManifest {
            flight_number: self.number.to_string(),
            airline: self.airline().to_string(),
            aircraft_model: self.aircraft_model().to_string(),
            registration: self.registration().to_string(),
            total_seats: self.layout.num_seats(),
            available_seats: self.num_available_seats(),
            assignments: self
                .boarding_cards()
                .into_iter()
                .map(|card| SeatAssignment {
                    seat: card.seat,
                    passenger: card.passenger,
                })
                .collect(),
            history: self.history.clone(),
        }
    }

    /// Successful seat changes, oldest first
    pub fn history(&self) -> &[SeatEvent] {
        &self.history
    }

    fn occupant(&self, seat: SeatAddress) -> Option<&str> {
        self.seating
            .get(&seat.row())
            .and_then(|row| row.get(&seat.letter()))
            .and_then(|slot| slot.as_deref())
    }

    /// Existing slot for `seat`; never adds rows or letters to the grid
    fn slot_mut(&mut self, seat: SeatAddress) -> Result<&mut Option<String>, BookingError> {
        self.seating
            .get_mut(&seat.row())
            .ok_or_else(|| BookingError::InvalidRowNumber(seat.row().to_string()))?
            .get_mut(&seat.letter())
            .ok_or_else(|| BookingError::InvalidSeatLetter(seat.letter().to_string()))
    }
}
