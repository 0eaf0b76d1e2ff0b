use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use mrt_finder::domain::{Coordinate, InvalidCoordinate};
use mrt_finder::{MapConfig, load_stations, locate, render_html};

/// Where the map is written when `--out` is not given.
const DEFAULT_OUTPUT: &str = "map.html";

const USAGE: &str = "usage: mrt-finder <stations.geojson> <lat,lon>... [--out map.html]";

#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("missing station file")]
    MissingStations,

    #[error("missing value for --out")]
    MissingOutput,

    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),
}

#[derive(Debug)]
struct Args {
    stations: PathBuf,
    locations: Vec<Coordinate>,
    output: PathBuf,
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut args = args.into_iter();
        let stations = args.next().ok_or(ArgsError::MissingStations)?;

        let mut locations = Vec::new();
        let mut output = PathBuf::from(DEFAULT_OUTPUT);
        while let Some(arg) = args.next() {
            if arg == "--out" {
                output = args.next().ok_or(ArgsError::MissingOutput)?.into();
            } else {
                locations.push(Coordinate::parse(&arg)?);
            }
        }

        Ok(Self {
            stations: stations.into(),
            locations,
            output,
        })
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = load_stations(&args.stations);
    info!("Loaded {} stations", catalog.stations.len());

    let located = match locate(&args.locations, &catalog.stations, &MapConfig::default()) {
        Ok(located) => located,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", located.summary);

    let html = match render_html(&located.map, "Nearest MRT station") {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Failed to render map: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::write(&args.output, html) {
        eprintln!("Failed to write {}: {e}", args.output.display());
        return ExitCode::FAILURE;
    }
    info!("Map written to {}", args.output.display());

    ExitCode::SUCCESS
}
