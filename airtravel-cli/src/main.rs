use airtravel_cli::{render, setup, Config, OutputFormat};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "airtravel")]
#[command(version, about = "Seat allocation and boarding cards for scheduled flights", long_about = None)]
struct Cli {
    /// Configuration file describing aircraft and flights
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format, overrides `output.format` from the configuration
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "airtravel_cli=info,airtravel_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let format = cli.format.unwrap_or(config.output.format);

    let schedule = setup::build_schedule(&config)?;
    for flight in schedule.flights() {
        tracing::info!(
            "{}: {} of {} seats available",
            flight.number(),
            flight.num_available_seats(),
            flight.layout().num_seats()
        );
    }

    let stdout = std::io::stdout();
    render(&schedule, format, stdout.lock())
}
