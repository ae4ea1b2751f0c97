//! APAR inspection admission engine - CLI harness
//!
//! Exercises the decision core from the command line so field behavior can be
//! verified without the console UI:
//! - `geofence` - check a reading against an asset geofence
//! - `classify` - classify schedules from a JSON file
//! - `countdown` - run the capture countdown with a real timer
//! - `config` - print the effective configuration
//!
//! Module structure:
//! - `domain/` - Core business types (Coordinate, Schedule, EvidenceSet)
//! - `io/` - External interfaces (submission reply parsing)
//! - `services/` - Decision logic (geofence, classifier, guard, bulk)
//! - `infra/` - Infrastructure (Config)

use anyhow::Context;
use apar_inspect::domain::{AssetKind, Coordinate, GeofenceConfig, Schedule};
use apar_inspect::infra::Config;
use apar_inspect::services::{schedule_status, CountdownCapture, GeofenceValidator};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// APAR inspection admission engine
#[derive(Parser, Debug)]
#[command(name = "apar-inspect", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check a position reading against an asset geofence
    Geofence {
        /// Reading latitude, decimal degrees
        #[arg(long)]
        lat: f64,
        /// Reading longitude, decimal degrees
        #[arg(long)]
        lon: f64,
        /// Asset center latitude
        #[arg(long)]
        center_lat: f64,
        /// Asset center longitude
        #[arg(long)]
        center_lon: f64,
        /// Geofence radius in meters
        #[arg(long)]
        radius: f64,
    },
    /// Classify schedules from a JSON file (array of schedule records)
    Classify {
        /// Path to the JSON file
        file: String,
        /// Reference instant, e.g. 2024-06-10T10:00:00 (defaults to now)
        #[arg(long)]
        at: Option<String>,
    },
    /// Run the capture countdown with a real timer
    Countdown,
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, level via RUST_LOG (default INFO)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config_path = Config::resolve_path(cli.config.as_deref());
    let config = Config::load_from_path(&config_path);

    info!(
        version = %env!("CARGO_PKG_VERSION"),
        git_hash = %env!("GIT_HASH"),
        config_file = %config.config_file(),
        "apar-inspect starting"
    );

    match cli.cmd {
        Command::Geofence { lat, lon, center_lat, center_lon, radius } => {
            let result = GeofenceValidator::check(
                Coordinate::new(lat, lon),
                &GeofenceConfig {
                    center: Coordinate::new(center_lat, center_lon),
                    radius_meters: radius,
                },
            );

            println!(
                "distance: {}m  bearing: {:.1}°  within_radius: {}",
                result.distance_meters, result.bearing_degrees, result.is_within_radius
            );
        }
        Command::Classify { file, at } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("read schedule file {file}"))?;
            let schedules: Vec<Schedule> =
                serde_json::from_str(&raw).context("parse schedule file")?;

            let now = match at {
                Some(s) => NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S")
                    .context("parse --at timestamp")?,
                None => chrono::Local::now().naive_local(),
            };

            for schedule in &schedules {
                let status = schedule_status::classify(schedule, now);
                let p = status.presentation();
                println!(
                    "schedule {} asset {} -> {} [{} / {}]",
                    schedule.id, schedule.asset_id, status.as_str(), p.label, p.color
                );
            }
        }
        Command::Countdown => {
            let mut fsm = CountdownCapture::new();
            let secs = config.countdown_secs();
            fsm.start(secs);
            println!("{secs}...");

            let fired = fsm
                .run(config.capture_tick(), |remaining| println!("{remaining}..."))
                .await;

            if fired {
                println!("capture!");
            }
        }
        Command::Config => {
            let policy = config.location_policy();
            println!("config_file: {}", config.config_file());
            println!(
                "location: high_accuracy={} timeout={}ms max_reading_age={}s",
                policy.high_accuracy,
                policy.timeout.as_millis(),
                policy.max_reading_age.as_secs()
            );
            for kind in [AssetKind::Static, AssetKind::Mobile] {
                let req = config.evidence_requirements(kind);
                println!(
                    "evidence.{}: photo={} selfie={}",
                    kind.as_str(), req.photo, req.selfie
                );
            }
            println!(
                "capture: countdown={}s tick={}ms",
                config.countdown_secs(),
                config.capture_tick().as_millis()
            );
        }
    }

    Ok(())
}
