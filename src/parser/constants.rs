// Column positions of a state vector row in the `states/all` response.
pub const ICAO24: usize = 0;
pub const CALLSIGN: usize = 1;
pub const ORIGIN_COUNTRY: usize = 2;
pub const TIME_POSITION: usize = 3;
pub const LAST_CONTACT: usize = 4;
pub const LATITUDE: usize = 5;
pub const LONGITUDE: usize = 6;
pub const BARO_ALTITUDE: usize = 7;
pub const VELOCITY: usize = 9;
pub const TRUE_TRACK: usize = 10;
pub const VERTICAL_RATE: usize = 11;

/// Rows shorter than this cannot carry every column we read.
pub const MINIMUM_ROW_LENGTH: usize = VERTICAL_RATE + 1;
