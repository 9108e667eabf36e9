pub mod app_config;
pub mod printer;
pub mod setup;

pub use app_config::{Config, OutputFormat};
pub use printer::ConsoleCardPrinter;

use airtravel_booking::{FlightManifest, Schedule};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct Report {
    pub flights: Vec<FlightManifest>,
    pub total_available_seats: usize,
}

impl Report {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            flights: schedule.flights().map(|f| f.manifest()).collect(),
            total_available_seats: schedule.total_available_seats(),
        }
    }
}

/// Write the schedule to `out`: boarding cards for every flight, or a JSON report
pub fn render<W: Write>(schedule: &Schedule, format: OutputFormat, mut out: W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut printer = ConsoleCardPrinter::new(out);
            for flight in schedule.flights() {
                flight.make_boarding_cards(&mut printer);
            }
            printer.finish()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &Report::from_schedule(schedule))?;
            writeln!(out)?;
        }
    }
    Ok(())
}
