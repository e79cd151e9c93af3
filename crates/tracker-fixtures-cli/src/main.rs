use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracker_fixtures_aruco::builtins;
use tracker_fixtures_print::{
    generate_marker_image, MarkerImageSpec, MarkerWriteError, DEFAULT_MARKER_SIZE_PX,
    DEFAULT_QUIET_ZONE_PX,
};

/// Generate a printable ArUco marker image for testing the web tracker.
#[derive(Parser, Debug)]
#[command(name = "generate-marker", version, about)]
struct Cli {
    /// Marker id within the dictionary.
    #[arg(default_value_t = 0)]
    marker_id: u32,

    /// Output image path; the format is inferred from the extension.
    #[arg(default_value = "aruco_marker.png")]
    output: PathBuf,

    /// Inner marker side length in pixels (quiet zone excluded).
    #[arg(long, default_value_t = DEFAULT_MARKER_SIZE_PX)]
    size: u32,

    /// White quiet-zone width around the marker, in pixels.
    #[arg(long, default_value_t = DEFAULT_QUIET_ZONE_PX)]
    border: u32,

    /// Built-in dictionary name. Must match the dictionary the tracker
    /// detects against.
    #[arg(long, default_value = builtins::TRACKER_DICT.name)]
    dictionary: String,

    /// Print a JSON report instead of the plain confirmation lines.
    #[arg(long)]
    json: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("unknown dictionary '{0}' (available: DICT_4X4_50, DICT_6X6_250)")]
    UnknownDictionary(String),
    #[error(transparent)]
    Write(#[from] MarkerWriteError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let dict = builtins::builtin_dictionary(&cli.dictionary)
        .ok_or_else(|| CliError::UnknownDictionary(cli.dictionary.clone()))?;

    let spec = MarkerImageSpec {
        marker_id: cli.marker_id,
        size_px: cli.size,
        quiet_zone_px: cli.border,
    };
    let report = generate_marker_image(dict, &spec, &cli.output)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "ArUco marker (ID: {}) saved to {}",
            report.marker_id, report.path
        );
        println!("Size: {}x{} pixels", report.width, report.height);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
