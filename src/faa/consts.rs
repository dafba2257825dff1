pub const ACFTREF_FILE_NAME: &str = "ACFTREF.txt";
pub const ACFTREF_MIN_LINE_LEN: usize = 68;

pub const ACFTREF_ID_OFFSET: usize = 0;
pub const ACFTREF_MANUFACTURER_START: usize = 8;
pub const ACFTREF_MANUFACTURER_END: usize = 38;
pub const ACFTREF_MODEL_START: usize = 39;
pub const ACFTREF_MODEL_END: usize = 59;
pub const ACFTREF_CATEGORY_OFFSET: usize = 60;
pub const ACFTREF_SEAT_COUNT_OFFSET: usize = 72;

pub const MASTER_FILE_NAME: &str = "MASTER.txt";
pub const MASTER_MIN_LINE_LEN: usize = 610;

pub const MASTER_TAIL_NUMBER_START: usize = 0;
pub const MASTER_TAIL_NUMBER_END: usize = 5;
pub const MASTER_TYPE_ID_OFFSET: usize = 37;
pub const MASTER_REGISTRANT_START: usize = 58;
pub const MASTER_REGISTRANT_END: usize = 107;
pub const MASTER_ICAO_OFFSET: usize = 601;
