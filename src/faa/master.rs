use super::consts::*;
use super::{DecodeError, DecodedFile, LoadError, checked_line};
use crate::RegistrationRecord;
use crate::fields::{extract_trimmed, non_empty, parse_hex, parse_int};
use std::io::BufRead;
use std::path::Path;

/// Opens and reads a `MASTER.txt` file.
pub fn open(path: impl AsRef<Path>) -> Result<DecodedFile<RegistrationRecord>, LoadError> {
    super::open_file(path.as_ref(), decode_line)
}

pub fn read<R: BufRead>(reader: R) -> Result<DecodedFile<RegistrationRecord>, LoadError> {
    super::read_file(reader, decode_line)
}

pub fn decode_line(line: &[u8]) -> Result<RegistrationRecord, DecodeError> {
    let line = checked_line(line, MASTER_MIN_LINE_LEN)?;

    let registrant_name = extract_trimmed(line, MASTER_REGISTRANT_START, MASTER_REGISTRANT_END);

    Ok(RegistrationRecord {
        id: parse_hex(line, MASTER_ICAO_OFFSET),
        tail_number: extract_trimmed(line, MASTER_TAIL_NUMBER_START, MASTER_TAIL_NUMBER_END),
        type_id: parse_int(line, MASTER_TYPE_ID_OFFSET),
        registrant_name: non_empty(registrant_name),
    })
}
