//! Builders for well-formed FAA lines.

use super::consts::*;

fn place(line: &mut [u8], offset: usize, value: &[u8]) {
    line[offset..offset + value.len()].copy_from_slice(value);
}

/// An `ACFTREF.txt` line, comma separated like the published file.
pub fn type_line(id: u64, manufacturer: &str, model: &str, category: u8, seats: u32) -> Vec<u8> {
    let mut line = vec![b' '; 80];
    for separator in [7, 38, 59, 62] {
        line[separator] = b',';
    }
    place(&mut line, ACFTREF_ID_OFFSET, id.to_string().as_bytes());
    place(&mut line, ACFTREF_MANUFACTURER_START, manufacturer.as_bytes());
    place(&mut line, ACFTREF_MODEL_START, model.as_bytes());
    place(&mut line, ACFTREF_CATEGORY_OFFSET, category.to_string().as_bytes());
    place(&mut line, ACFTREF_SEAT_COUNT_OFFSET, seats.to_string().as_bytes());
    line.push(b'\n');
    line
}

/// A `MASTER.txt` line. The registrant is raw bytes so tests can use
/// Windows-1252 text.
pub fn registration_line(
    tail_number: &str,
    type_id: u64,
    registrant: impl AsRef<[u8]>,
    icao: &str,
) -> Vec<u8> {
    let mut line = vec![b' '; 620];
    line[MASTER_ICAO_OFFSET + 10] = b',';
    place(&mut line, MASTER_TAIL_NUMBER_START, tail_number.as_bytes());
    place(&mut line, MASTER_TYPE_ID_OFFSET, type_id.to_string().as_bytes());
    place(&mut line, MASTER_REGISTRANT_START, registrant.as_ref());
    place(&mut line, MASTER_ICAO_OFFSET, icao.as_bytes());
    line.push(b'\n');
    line
}

/// Cuts `line` to `len` content bytes and terminates it again.
pub fn resized(mut line: Vec<u8>, len: usize) -> Vec<u8> {
    line.resize(len, b' ');
    line.push(b'\n');
    line
}
