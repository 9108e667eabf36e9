use airtravel_booking::CardEmitter;
use std::io::{self, Write};

/// Draw one boarding card as a framed box
pub fn render_card(passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) -> String {
    let output = format!(
        "| Name: {}  Flight: {}  Seat: {}  Aircraft: {} |",
        passenger, flight_number, seat, aircraft_model
    );
    let inner = output.chars().count() - 2;
    let banner = format!("+{}+", "-".repeat(inner));
    let border = format!("|{}|", " ".repeat(inner));

    [banner.as_str(), &border, &output, &border, &banner].join("\n")
}

/// Card emitter that writes boxed cards, each followed by a blank line.
///
/// The first write error stops output and is returned by [`finish`](Self::finish).
pub struct ConsoleCardPrinter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleCardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> CardEmitter for ConsoleCardPrinter<W> {
    fn emit(&mut self, passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) {
        if self.error.is_some() {
            return;
        }

        let card = render_card(passenger, seat, flight_number, aircraft_model);
        if let Err(e) = writeln!(self.out, "{}\n", card) {
            self.error = Some(e);
        }
    }
}
