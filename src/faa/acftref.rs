use super::consts::*;
use super::{DecodeError, DecodedFile, LoadError, checked_line};
use crate::TypeRecord;
use crate::fields::{extract_trimmed, non_empty, parse_int};
use std::io::BufRead;
use std::path::Path;

/// Opens and reads an `ACFTREF.txt` file.
pub fn open(path: impl AsRef<Path>) -> Result<DecodedFile<TypeRecord>, LoadError> {
    super::open_file(path.as_ref(), decode_line)
}

pub fn read<R: BufRead>(reader: R) -> Result<DecodedFile<TypeRecord>, LoadError> {
    super::read_file(reader, decode_line)
}

pub fn decode_line(line: &[u8]) -> Result<TypeRecord, DecodeError> {
    let line = checked_line(line, ACFTREF_MIN_LINE_LEN)?;

    let manufacturer = extract_trimmed(line, ACFTREF_MANUFACTURER_START, ACFTREF_MANUFACTURER_END);
    let model = extract_trimmed(line, ACFTREF_MODEL_START, ACFTREF_MODEL_END);

    // out of range codes saturate and resolve to an unknown category
    let category = u8::try_from(parse_int(line, ACFTREF_CATEGORY_OFFSET)).unwrap_or(u8::MAX);
    let seat_count = u32::try_from(parse_int(line, ACFTREF_SEAT_COUNT_OFFSET)).unwrap_or(u32::MAX);

    Ok(TypeRecord {
        id: parse_int(line, ACFTREF_ID_OFFSET),
        manufacturer: non_empty(manufacturer),
        model: non_empty(model),
        category,
        seat_count,
    })
}
