use anyhow::Context;
use clap::Parser;
use planedb::{Config, PlaneDb};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_UNAVAILABLE: u8 = 2;

/// Look up an aircraft in the FAA registration database by ICAO id
#[derive(Debug, Parser)]
struct Options {
    /// ICAO 24-bit address in hex, e.g. A835AF
    icao: String,

    /// Directory containing the database files
    #[arg(long, env = "PLANEDB_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Aircraft reference file, relative to the data directory
    #[arg(long, default_value = planedb::faa::ACFTREF_FILE_NAME)]
    types_file: PathBuf,

    /// Registration file, relative to the data directory
    #[arg(long, default_value = planedb::faa::MASTER_FILE_NAME)]
    registrations_file: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    let options = Options::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;

    let config = Config::in_dir(options.data_dir)
        .with_types_file(options.types_file)
        .with_registrations_file(options.registrations_file);

    println!("{}", options.icao);

    let db = match PlaneDb::open(&config).context("could not initialize plane database") {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{err:#}");
            return Ok(ExitCode::from(EXIT_UNAVAILABLE));
        }
    };

    if !db.registration_stats().available {
        println!("Registration data unavailable");
        return Ok(ExitCode::from(EXIT_UNAVAILABLE));
    }

    let code = match db.lookup_registration(&options.icao) {
        Some(plane) => {
            print!("{}", db.report(plane));
            ExitCode::SUCCESS
        }
        None => {
            println!("Plane not found");
            ExitCode::from(EXIT_NOT_FOUND)
        }
    };

    db.close();
    Ok(code)
}
