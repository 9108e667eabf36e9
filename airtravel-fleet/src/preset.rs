use crate::layout::{AircraftLayout, LayoutError};
use serde::{Deserialize, Serialize};

/// Aircraft types with a fixed cabin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AircraftType {
    AirbusA319,
    Boeing777,
}

impl AircraftType {
    pub fn model(&self) -> &'static str {
        match self {
            AircraftType::AirbusA319 => "Airbus A319",
            AircraftType::Boeing777 => "Boeing 777",
        }
    }

    /// (rows, seats per row)
    pub fn dimensions(&self) -> (u32, usize) {
        match self {
            AircraftType::AirbusA319 => (22, 6),
            AircraftType::Boeing777 => (55, 10),
        }
    }

    pub fn layout(&self, registration: impl Into<String>) -> AircraftLayout {
        let (num_rows, seats_per_row) = self.dimensions();
        AircraftLayout::from_trusted(registration.into(), self.model(), num_rows, seats_per_row)
    }
}

impl AircraftLayout {
    pub fn airbus_a319(registration: impl Into<String>) -> Self {
        AircraftType::AirbusA319.layout(registration)
    }

    pub fn boeing_777(registration: impl Into<String>) -> Self {
        AircraftType::Boeing777.layout(registration)
    }
}

/// Declarative description of an airframe, as found in configuration files.
///
/// Either `preset` is set, or all of `model`, `num_rows` and `seats_per_row`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutSpec {
    pub registration: String,
    #[serde(default)]
    pub preset: Option<AircraftType>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub num_rows: Option<u32>,
    #[serde(default)]
    pub seats_per_row: Option<usize>,
}

impl LayoutSpec {
    pub fn build(&self) -> Result<AircraftLayout, LayoutError> {
        if let Some(preset) = self.preset {
            tracing::debug!("Using {:?} preset for {}", preset, self.registration);
            return Ok(preset.layout(self.registration.clone()));
        }

        let missing = |field: &str| {
            LayoutError::InvalidConfiguration(format!(
                "{} has no preset and no {}",
                self.registration, field
            ))
        };

        let model = self.model.clone().ok_or_else(|| missing("model"))?;
        let num_rows = self.num_rows.ok_or_else(|| missing("num_rows"))?;
        let seats_per_row = self.seats_per_row.ok_or_else(|| missing("seats_per_row"))?;

        AircraftLayout::new(self.registration.clone(), model, num_rows, seats_per_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let a319 = AircraftLayout::airbus_a319("G-EUPT");
        assert_eq!(a319.model(), "Airbus A319");
        assert_eq!(a319.num_seats(), 22 * 6);

        let b777 = AircraftLayout::boeing_777("F-GSPS");
        assert_eq!(b777.model(), "Boeing 777");
        assert_eq!(b777.rows(), 1..=55);
        assert_eq!(b777.num_seats(), 55 * 10);
    }

    #[test]
    fn test_spec_with_preset() {
        let spec: LayoutSpec = serde_json::from_str(
            r#"{ "registration": "G-EUAH", "preset": "AIRBUS_A319" }"#,
        )
        .unwrap();

        let layout = spec.build().unwrap();
        assert_eq!(layout.registration(), "G-EUAH");
        assert_eq!(layout.seat_letters(), "ABCDEF");
    }

    #[test]
    fn test_spec_with_explicit_dimensions() {
        let spec = LayoutSpec {
            registration: "D-ABCD".to_string(),
            preset: None,
            model: Some("Embraer 190".to_string()),
            num_rows: Some(25),
            seats_per_row: Some(4),
        };

        let layout = spec.build().unwrap();
        assert_eq!(layout.seat_letters(), "ABCD");
        assert_eq!(layout.num_seats(), 100);
    }

    #[test]
    fn test_spec_missing_dimensions() {
        let spec = LayoutSpec {
            registration: "D-ABCD".to_string(),
            preset: None,
            model: Some("Embraer 190".to_string()),
            num_rows: None,
            seats_per_row: Some(4),
        };

        let err = spec.build().unwrap_err();
        assert!(err.to_string().contains("num_rows"));
    }
}
