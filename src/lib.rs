//! Reader for the FAA aircraft registration database.
//!
//! [PlaneDb] loads the aircraft reference file (`ACFTREF.txt`) and the
//! registration file (`MASTER.txt`) into memory and looks up aircraft by
//! their hex encoded ICAO id:
//!
//! ```no_run
//! use planedb::{Config, PlaneDb};
//!
//! let db = PlaneDb::open(&Config::default())?;
//! if let Some(plane) = db.lookup_registration("A835AF") {
//!     println!("{}", db.report(plane));
//! }
//! # Ok::<(), planedb::Error>(())
//! ```
//!
//! Missing files are not an error: the affected collection stays empty and
//! every lookup against it returns `None`.

mod config;
mod db;
mod error;
pub mod faa;
pub mod fields;
mod memo;
mod report;

pub use config::Config;
pub use db::{LoadStats, PlaneDb};
pub use error::Error;
pub use report::Report;

/// An entry of the aircraft reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRecord {
    /// Manufacturer, model and series code.
    pub id: u64,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    /// Raw aircraft category code, see [TypeRecord::category].
    pub category: u8,
    pub seat_count: u32,
}

impl TypeRecord {
    pub fn category(&self) -> Option<AircraftCategory> {
        AircraftCategory::from_code(self.category)
    }
}

/// An entry of the registration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRecord {
    /// ICAO 24-bit address.
    pub id: u32,
    /// N-number without the `N` prefix.
    pub tail_number: String,
    /// Key into the aircraft reference file, see [TypeRecord::id].
    pub type_id: u64,
    pub registrant_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftCategory {
    None,
    Glider,
    Balloon,
    BlimpDirigible,
    FixedWingSingleEngine,
    FixedWingMultiEngine,
    Rotorcraft,
    WeightShiftControl,
    PoweredParachute,
    Gyroplane,
}

impl AircraftCategory {
    const ALL: [AircraftCategory; 10] = [
        AircraftCategory::None,
        AircraftCategory::Glider,
        AircraftCategory::Balloon,
        AircraftCategory::BlimpDirigible,
        AircraftCategory::FixedWingSingleEngine,
        AircraftCategory::FixedWingMultiEngine,
        AircraftCategory::Rotorcraft,
        AircraftCategory::WeightShiftControl,
        AircraftCategory::PoweredParachute,
        AircraftCategory::Gyroplane,
    ];

    /// Returns `None` for codes outside `0..=9`.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            AircraftCategory::None => "None",
            AircraftCategory::Glider => "Glider",
            AircraftCategory::Balloon => "Balloon",
            AircraftCategory::BlimpDirigible => "Blimp/Dirigible",
            AircraftCategory::FixedWingSingleEngine => "Fixed wing single engine",
            AircraftCategory::FixedWingMultiEngine => "Fixed wing multi engine",
            AircraftCategory::Rotorcraft => "Rotorcraft",
            AircraftCategory::WeightShiftControl => "Weight-shift-control",
            AircraftCategory::PoweredParachute => "Powered Parachute",
            AircraftCategory::Gyroplane => "Gyroplane",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_codes_round_trip() {
        for code in 0..=9 {
            assert_eq!(AircraftCategory::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn category_rejects_out_of_range_codes() {
        assert_eq!(AircraftCategory::from_code(10), None);
        assert_eq!(AircraftCategory::from_code(u8::MAX), None);
    }

    #[test]
    fn category_names_match_faa_table() {
        assert_eq!(AircraftCategory::from_code(0).unwrap().name(), "None");
        assert_eq!(AircraftCategory::from_code(3).unwrap().name(), "Blimp/Dirigible");
        assert_eq!(
            AircraftCategory::from_code(4).unwrap().name(),
            "Fixed wing single engine"
        );
        assert_eq!(AircraftCategory::from_code(9).unwrap().name(), "Gyroplane");
    }
}
