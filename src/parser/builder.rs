use super::constants::{
    BARO_ALTITUDE, CALLSIGN, ICAO24, LAST_CONTACT, LATITUDE, LONGITUDE, MINIMUM_ROW_LENGTH,
    ORIGIN_COUNTRY, TIME_POSITION, TRUE_TRACK, VELOCITY, VERTICAL_RATE,
};
use crate::types::{local_datetime_from_unix, StateVector};

#[derive(Debug, PartialEq)]
pub enum StateVectorBuildError {
    MissingICAO24,
    RowTooShort(usize),
    InvalidField { column: usize, found: String },
    InvalidTimestamp(i64),
}
impl std::fmt::Display for StateVectorBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateVectorBuildError::MissingICAO24 => write!(f, "Row has no icao24 address"),
            StateVectorBuildError::RowTooShort(length) => write!(
                f,
                "Row has {length} columns, expected at least {MINIMUM_ROW_LENGTH}"
            ),
            StateVectorBuildError::InvalidField { column, found } => {
                write!(f, "Column {column} has unexpected value {found}")
            }
            StateVectorBuildError::InvalidTimestamp(seconds) => {
                write!(f, "Timestamp {seconds} is out of range")
            }
        }
    }
}
impl std::error::Error for StateVectorBuildError {}

/// Builds a record from one row of the `states` array.
///
/// `fetched_at` is used as the observation time when the row carries neither a
/// position time nor a last contact time.
pub fn build_state_vector_from_row(
    row: &[serde_json::Value],
    fetched_at: chrono::NaiveDateTime,
) -> Result<StateVector, StateVectorBuildError> {
    let icao24 = optional_str(row, ICAO24)?.ok_or(StateVectorBuildError::MissingICAO24)?;

    if row.len() < MINIMUM_ROW_LENGTH {
        return Err(StateVectorBuildError::RowTooShort(row.len()));
    }

    let observed_at = match optional_unix_seconds(row, TIME_POSITION)?
        .or(optional_unix_seconds(row, LAST_CONTACT)?)
    {
        Some(seconds) => local_datetime_from_unix(seconds)
            .ok_or(StateVectorBuildError::InvalidTimestamp(seconds))?,
        None => fetched_at,
    };

    let mut state_vector =
        StateVector::new(icao24.to_string(), optional_str(row, CALLSIGN)?, observed_at);
    state_vector.country = optional_str(row, ORIGIN_COUNTRY)?.map(str::to_string);
    state_vector.latitude = optional_f64(row, LATITUDE)?;
    state_vector.longitude = optional_f64(row, LONGITUDE)?;
    state_vector.altitude = optional_f64(row, BARO_ALTITUDE)?;
    state_vector.velocity = optional_f64(row, VELOCITY)?;
    state_vector.heading = optional_f64(row, TRUE_TRACK)?;
    state_vector.vertical_rate = optional_f64(row, VERTICAL_RATE)?;
    Ok(state_vector)
}

fn invalid(row: &[serde_json::Value], column: usize) -> StateVectorBuildError {
    StateVectorBuildError::InvalidField {
        column,
        found: row[column].to_string(),
    }
}

fn optional_str(
    row: &[serde_json::Value],
    column: usize,
) -> Result<Option<&str>, StateVectorBuildError> {
    match row.get(column) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(string)) => Ok(Some(string.as_str())),
        Some(_) => Err(invalid(row, column)),
    }
}

fn optional_f64(
    row: &[serde_json::Value],
    column: usize,
) -> Result<Option<f64>, StateVectorBuildError> {
    match row.get(column) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| invalid(row, column)),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn optional_unix_seconds(
    row: &[serde_json::Value],
    column: usize,
) -> Result<Option<i64>, StateVectorBuildError> {
    match row.get(column) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .or_else(|| value.as_f64().map(|seconds| seconds.floor() as i64))
            .map(Some)
            .ok_or_else(|| invalid(row, column)),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_state_vector_from_row, StateVectorBuildError};
    use crate::types::local_datetime_from_unix;

    fn fetched_at() -> chrono::NaiveDateTime {
        local_datetime_from_unix(1_700_000_100).expect("valid timestamp")
    }

    fn full_row() -> Vec<serde_json::Value> {
        serde_json::json!([
            "3c6444", "DLH9LF  ", "Germany", 1_700_000_000, 1_700_000_001,
            50.1, 8.6, 10972.8, false, 231.5, 0.0, -3.25, null, 11285.2, "1000", false, 0
        ])
        .as_array()
        .expect("array literal")
        .clone()
    }

    #[test]
    fn when_building_from_full_row_then_all_columns_are_mapped() {
        let record = build_state_vector_from_row(&full_row(), fetched_at()).expect("valid row");

        assert_eq!(record.icao24, "3c6444");
        assert_eq!(record.callsign, "DLH9LF");
        assert_eq!(record.country.as_deref(), Some("Germany"));
        assert_eq!(record.latitude, Some(50.1));
        assert_eq!(record.longitude, Some(8.6));
        assert_eq!(record.altitude, Some(10972.8));
        assert_eq!(record.velocity, Some(231.5));
        assert_eq!(record.heading, Some(0.0));
        assert_eq!(record.vertical_rate, Some(-3.25));
        assert_eq!(
            record.observed_at,
            local_datetime_from_unix(1_700_000_000).expect("valid timestamp")
        );
    }

    #[test]
    fn when_icao24_is_null_then_row_is_rejected() {
        let mut row = full_row();
        row[0] = serde_json::Value::Null;
        assert_eq!(
            build_state_vector_from_row(&row, fetched_at()),
            Err(StateVectorBuildError::MissingICAO24)
        );
    }

    #[test]
    fn when_optional_columns_are_null_then_they_stay_absent() {
        let mut row = full_row();
        for column in [1, 2, 5, 6, 7, 9, 10, 11] {
            row[column] = serde_json::Value::Null;
        }
        let record = build_state_vector_from_row(&row, fetched_at()).expect("valid row");

        assert_eq!(record.callsign, "Unknown");
        assert_eq!(record.country, None);
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
        assert_eq!(record.altitude, None);
        assert_eq!(record.velocity, None);
        assert_eq!(record.heading, None);
        assert_eq!(record.vertical_rate, None);
    }

    #[test]
    fn when_position_time_is_null_then_last_contact_is_used() {
        let mut row = full_row();
        row[3] = serde_json::Value::Null;
        let record = build_state_vector_from_row(&row, fetched_at()).expect("valid row");
        assert_eq!(
            record.observed_at,
            local_datetime_from_unix(1_700_000_001).expect("valid timestamp")
        );
    }

    #[test]
    fn when_both_times_are_null_then_fetch_time_is_used() {
        let mut row = full_row();
        row[3] = serde_json::Value::Null;
        row[4] = serde_json::Value::Null;
        let record = build_state_vector_from_row(&row, fetched_at()).expect("valid row");
        assert_eq!(record.observed_at, fetched_at());
    }

    #[test]
    fn when_row_is_truncated_then_it_is_rejected() {
        let row = full_row()[..6].to_vec();
        assert_eq!(
            build_state_vector_from_row(&row, fetched_at()),
            Err(StateVectorBuildError::RowTooShort(6))
        );
    }

    #[test]
    fn when_numeric_column_holds_text_then_it_is_rejected() {
        let mut row = full_row();
        row[7] = serde_json::json!("high");
        let error = build_state_vector_from_row(&row, fetched_at()).expect_err("invalid row");
        assert_eq!(
            error,
            StateVectorBuildError::InvalidField {
                column: 7,
                found: String::from("\"high\"")
            }
        );
    }
}
