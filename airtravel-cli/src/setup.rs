use crate::app_config::Config;
use airtravel_booking::{FlightBooking, Schedule};
use airtravel_fleet::AircraftLayout;
use anyhow::{anyhow, bail, Context};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Build every configured flight, seat its passengers, then apply relocations.
///
/// With no flights configured the built-in sample schedule is used.
pub fn build_schedule(config: &Config) -> anyhow::Result<Schedule> {
    if config.flights.is_empty() {
        info!("No flights configured, using sample schedule");
        return sample_schedule();
    }

    let mut fleet: HashMap<&str, Arc<AircraftLayout>> = HashMap::new();
    for spec in &config.aircraft {
        let layout = spec
            .build()
            .with_context(|| format!("Invalid aircraft {}", spec.registration))?;

        if fleet.insert(spec.registration.as_str(), Arc::new(layout)).is_some() {
            bail!("Aircraft {} is configured twice", spec.registration);
        }
    }

    let mut schedule = Schedule::new();
    for flight in &config.flights {
        let layout = fleet.get(flight.aircraft.as_str()).cloned().ok_or_else(|| {
            anyhow!("Flight {} uses unknown aircraft {}", flight.number, flight.aircraft)
        })?;

        schedule.open_flight(FlightBooking::new(&flight.number, layout)?)?;

        for passenger in &flight.passengers {
            schedule
                .allocate_seat(&flight.number, &passenger.seat, &passenger.name)
                .with_context(|| format!("Cannot seat passenger in {} on {}", passenger.seat, flight.number))?;
        }

        for relocation in &flight.relocations {
            schedule
                .relocate_passenger(&flight.number, &relocation.from, &relocation.to)
                .with_context(|| {
                    format!(
                        "Cannot move passenger from {} to {} on {}",
                        relocation.from, relocation.to, flight.number
                    )
                })?;
        }
    }

    Ok(schedule)
}

/// Two demonstration flights: BA758 on an Airbus A319 and AF72 on a Boeing 777
pub fn sample_schedule() -> anyhow::Result<Schedule> {
    let mut schedule = Schedule::new();

    let ba758 = schedule.open_flight(FlightBooking::new("BA758", AircraftLayout::airbus_a319("G-EUPT"))?)?;
    ba758.allocate_seat("12A", "Hrishi")?;
    ba758.allocate_seat("12F", "Kiran")?;
    ba758.allocate_seat("12E", "Vivek")?;
    ba758.allocate_seat("2E", "Harvey")?;
    ba758.allocate_seat("1E", "Mike")?;

    let af72 = schedule.open_flight(FlightBooking::new("AF72", AircraftLayout::boeing_777("F-GSPS"))?)?;
    af72.allocate_seat("55K", "Anika")?;
    af72.allocate_seat("33G", "Bruno")?;
    af72.allocate_seat("4B", "Chen")?;
    af72.allocate_seat("4A", "Dalia")?;

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_schedule() {
        let schedule = sample_schedule().unwrap();

        let ba758 = schedule.get_flight("BA758").unwrap();
        assert_eq!(ba758.num_available_seats(), 22 * 6 - 5);

        let af72 = schedule.get_flight("AF72").unwrap();
        assert_eq!(af72.aircraft_model(), "Boeing 777");
        assert_eq!(af72.num_available_seats(), 550 - 4);
    }

    #[test]
    fn test_empty_config_falls_back_to_sample() {
        let schedule = build_schedule(&Config::default()).unwrap();
        assert_eq!(schedule.len(), 2);
    }

    #[test]
    fn test_configured_schedule() {
        let config = Config::from_toml(
            r#"
            [[aircraft]]
            registration = "G-EUPT"
            preset = "AIRBUS_A319"

            [[flights]]
            number = "BA758"
            aircraft = "G-EUPT"
            passengers = [{ seat = "12A", name = "Hrishi" }]
            relocations = [{ from = "12A", to = "12B" }]

            [[flights]]
            number = "BA759"
            aircraft = "G-EUPT"
            "#,
        )
        .unwrap();

        let schedule = build_schedule(&config).unwrap();

        assert_eq!(schedule.len(), 2);
        let ba758 = schedule.get_flight("BA758").unwrap();
        assert_eq!(ba758.passenger_at("12B").unwrap(), Some("Hrishi"));
        assert!(Arc::ptr_eq(
            ba758.layout(),
            schedule.get_flight("BA759").unwrap().layout()
        ));
    }

    #[test]
    fn test_unknown_aircraft() {
        let config = Config::from_toml(
            r#"
            [[flights]]
            number = "BA758"
            aircraft = "G-NONE"
            "#,
        )
        .unwrap();

        let err = build_schedule(&config).unwrap_err();
        assert!(err.to_string().contains("unknown aircraft G-NONE"));
    }

    #[test]
    fn test_conflicting_passengers() {
        let config = Config::from_toml(
            r#"
            [[aircraft]]
            registration = "G-EUPT"
            preset = "AIRBUS_A319"

            [[flights]]
            number = "BA758"
            aircraft = "G-EUPT"
            passengers = [
                { seat = "12A", name = "Hrishi" },
                { seat = "12A", name = "Kiran" },
            ]
            "#,
        )
        .unwrap();

        let err = build_schedule(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("Seat 12A is already occupied"));
    }
}
