use crate::faa::{self, DecodedFile, LoadError};
use crate::fields::parse_hex;
use crate::memo::Memo;
use crate::{Config, Error, RegistrationRecord, Report, TypeRecord};
use std::io::BufRead;
use tracing::{debug, instrument, trace, warn};

/// Outcome of loading one of the database files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// `false` if the file could not be opened. Records handed to
    /// [PlaneDb::from_records] always count as available, even when empty.
    pub available: bool,
    pub loaded: usize,
    /// Lines that were too short to hold a record.
    pub skipped: usize,
}

/// In-memory aircraft registration database.
///
/// Lookups remember their last hit, so repeated queries for the same
/// aircraft skip the scan. The memo uses interior mutability, which makes
/// `PlaneDb` usable from one thread at a time only.
#[derive(Debug, Default)]
pub struct PlaneDb {
    types: Vec<TypeRecord>,
    registrations: Vec<RegistrationRecord>,
    last_type: Memo<u64>,
    last_registration: Memo<u32>,
    type_stats: LoadStats,
    registration_stats: LoadStats,
}

impl PlaneDb {
    /// Loads both database files from the locations in `config`.
    ///
    /// A file that cannot be opened leaves its collection empty. Read
    /// errors after the file was opened fail the whole operation.
    #[instrument(skip_all, fields(data_dir = %config.data_dir().display()))]
    pub fn open(config: &Config) -> Result<Self, Error> {
        let (types, type_stats) =
            collect("aircraft reference", faa::acftref::open(config.types_path()))
                .map_err(Error::Types)?;
        let (registrations, registration_stats) =
            collect("registration", faa::master::open(config.registrations_path()))
                .map_err(Error::Registrations)?;

        Ok(Self {
            type_stats,
            registration_stats,
            ..Self::from_records(types, registrations)
        })
    }

    /// Loads both collections from already opened sources.
    pub fn from_readers<T: BufRead, R: BufRead>(types: T, registrations: R) -> Result<Self, Error> {
        let (types, type_stats) =
            collect("aircraft reference", faa::acftref::read(types)).map_err(Error::Types)?;
        let (registrations, registration_stats) =
            collect("registration", faa::master::read(registrations))
                .map_err(Error::Registrations)?;

        Ok(Self {
            type_stats,
            registration_stats,
            ..Self::from_records(types, registrations)
        })
    }

    /// Builds a database from records the caller already holds.
    ///
    /// Both collections are reported as available with nothing skipped,
    /// whether or not they are empty. Only [PlaneDb::default] and a failed
    /// open mark a collection unavailable.
    pub fn from_records(types: Vec<TypeRecord>, registrations: Vec<RegistrationRecord>) -> Self {
        Self {
            type_stats: LoadStats {
                available: true,
                loaded: types.len(),
                skipped: 0,
            },
            registration_stats: LoadStats {
                available: true,
                loaded: registrations.len(),
                skipped: 0,
            },
            types,
            registrations,
            last_type: Memo::default(),
            last_registration: Memo::default(),
        }
    }

    /// Looks up a registration by its hex encoded ICAO id.
    ///
    /// The key is decoded like the id column of the registration file:
    /// up to eight hex digits, stopping at the first other character.
    pub fn lookup_registration(&self, icao: &str) -> Option<&RegistrationRecord> {
        self.lookup_registration_id(parse_hex(icao.as_bytes(), 0))
    }

    pub fn lookup_registration_id(&self, id: u32) -> Option<&RegistrationRecord> {
        let index = self.last_registration.get_or_find(id, || {
            self.registrations.iter().position(|r| r.id == id)
        })?;
        self.registrations.get(index)
    }

    pub fn lookup_type(&self, id: u64) -> Option<&TypeRecord> {
        let index = self
            .last_type
            .get_or_find(id, || self.types.iter().position(|t| t.id == id))?;
        self.types.get(index)
    }

    /// Returns the type record a registration refers to, if it is known.
    pub fn resolve_type(&self, registration: &RegistrationRecord) -> Option<&TypeRecord> {
        self.lookup_type(registration.type_id)
    }

    pub fn report<'a>(&'a self, registration: &'a RegistrationRecord) -> Report<'a> {
        Report::new(registration, self.resolve_type(registration))
    }

    pub fn types(&self) -> &[TypeRecord] {
        &self.types
    }

    pub fn registrations(&self) -> &[RegistrationRecord] {
        &self.registrations
    }

    pub fn type_stats(&self) -> LoadStats {
        self.type_stats
    }

    pub fn registration_stats(&self) -> LoadStats {
        self.registration_stats
    }

    /// Releases all records. Equivalent to dropping the database.
    pub fn close(self) {
        debug!(
            types = self.types.len(),
            registrations = self.registrations.len(),
            "closing plane database"
        );
    }
}

fn collect<T>(
    kind: &str,
    result: Result<DecodedFile<T>, LoadError>,
) -> Result<(Vec<T>, LoadStats), LoadError> {
    let decoded = match result {
        Ok(decoded) => decoded,
        Err(LoadError::SourceUnavailable { path, source }) => {
            warn!(path = %path.display(), error = %source, "{kind} file unavailable, continuing without it");
            return Ok((Vec::new(), LoadStats::default()));
        }
        Err(err) => return Err(err),
    };

    let skipped = decoded.skipped();
    let mut records = Vec::new();
    records.try_reserve_exact(decoded.records.len() - skipped)?;

    for (index, record) in decoded.records.into_iter().enumerate() {
        match record {
            Ok(record) => records.push(record),
            Err(err) => trace!(line = index + 1, %err, "skipping malformed {kind} line"),
        }
    }

    let stats = LoadStats {
        available: true,
        loaded: records.len(),
        skipped,
    };
    debug!(loaded = stats.loaded, skipped = stats.skipped, "loaded {kind} records");

    Ok((records, stats))
}
