use airtravel_fleet::LayoutSpec;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub aircraft: Vec<LayoutSpec>,
    #[serde(default)]
    pub flights: Vec<FlightSpec>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boarding cards drawn as boxes
    #[default]
    Text,
    /// Flight manifests as JSON
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FlightSpec {
    pub number: String,
    /// Registration of an entry in `aircraft`
    pub aircraft: String,
    #[serde(default)]
    pub passengers: Vec<PassengerSpec>,
    #[serde(default)]
    pub relocations: Vec<RelocationSpec>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PassengerSpec {
    pub seat: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RelocationSpec {
    pub from: String,
    pub to: String,
}

impl Config {
    /// Load `path` (must exist) or else `config/default` (optional), then
    /// overlay `AIRTRAVEL__*` environment variables, e.g.
    /// `AIRTRAVEL__OUTPUT__FORMAT=json`.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder();

        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name("config/default").required(false)),
        };

        builder
            .add_source(config::Environment::with_prefix("AIRTRAVEL").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn from_toml(text: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
