use crate::{RegistrationRecord, TypeRecord};
use std::fmt;

/// Human readable description of a registration and its aircraft type.
///
/// Absent text fields are left out. An unresolved type is printed as
/// `No model info`.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub registration: &'a RegistrationRecord,
    pub aircraft_type: Option<&'a TypeRecord>,
}

impl<'a> Report<'a> {
    pub fn new(registration: &'a RegistrationRecord, aircraft_type: Option<&'a TypeRecord>) -> Self {
        Self {
            registration,
            aircraft_type,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registration = self.registration;
        writeln!(f, "## Registration")?;
        writeln!(f, "    N-Number       : {}", registration.tail_number)?;
        if let Some(registrant) = &registration.registrant_name {
            writeln!(f, "    Registrant     : {registrant}")?;
        }
        if registration.type_id != 0 {
            writeln!(f, "    Model          : {}", registration.type_id)?;
        }

        writeln!(f, "## Type")?;
        let Some(aircraft_type) = self.aircraft_type else {
            return writeln!(f, "    No model info");
        };
        if let Some(manufacturer) = &aircraft_type.manufacturer {
            writeln!(f, "    Manufacturer   : {manufacturer}")?;
        }
        if let Some(model) = &aircraft_type.model {
            writeln!(f, "    Model name     : {model}")?;
        }
        let category = aircraft_type.category().map_or("Unknown", |c| c.name());
        writeln!(f, "    Type           : {} - {category}", aircraft_type.category)?;
        writeln!(f, "    Seats          : {}", aircraft_type.seat_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlaneDb;
    use crate::faa::fixtures::{registration_line, type_line};
    use insta::assert_snapshot;

    fn make_db() -> PlaneDb {
        let mut types = Vec::new();
        types.extend(type_line(2072738, "ACME AIRCRAFT", "SKYHAWK 172", 4, 4));
        types.extend(type_line(5620013, "", "", 12, 1));

        let mut registrations = Vec::new();
        registrations.extend(registration_line("172SP", 2072738, "SMITH JOHN", "A1B2C3"));
        registrations.extend(registration_line("99X", 1234567, "", "A00099"));
        registrations.extend(registration_line("5K", 5620013, "", "A00005"));
        registrations.extend(registration_line("7", 0, "", "A00007"));

        PlaneDb::from_readers(&types[..], &registrations[..]).unwrap()
    }

    #[test]
    fn report_includes_resolved_type() {
        let db = make_db();
        let plane = db.lookup_registration("A1B2C3").unwrap();
        assert_snapshot!(db.report(plane), @r###"
        ## Registration
            N-Number       : 172SP
            Registrant     : SMITH JOHN
            Model          : 2072738
        ## Type
            Manufacturer   : ACME AIRCRAFT
            Model name     : SKYHAWK 172
            Type           : 4 - Fixed wing single engine
            Seats          : 4
        "###);
    }

    #[test]
    fn report_marks_unresolved_type() {
        let db = make_db();
        let plane = db.lookup_registration("A00099").unwrap();
        assert_snapshot!(db.report(plane), @r###"
        ## Registration
            N-Number       : 99X
            Model          : 1234567
        ## Type
            No model info
        "###);
    }

    #[test]
    fn report_names_unknown_category() {
        let db = make_db();
        let plane = db.lookup_registration("A00005").unwrap();
        assert_snapshot!(db.report(plane), @r###"
        ## Registration
            N-Number       : 5K
            Model          : 5620013
        ## Type
            Type           : 12 - Unknown
            Seats          : 1
        "###);
    }

    #[test]
    fn report_omits_zero_type_id() {
        let db = make_db();
        let plane = db.lookup_registration("A00007").unwrap();
        let report = db.report(plane).to_string();
        assert!(!report.contains("Model          :"));
        assert!(report.ends_with("    No model info\n"));
    }
}
