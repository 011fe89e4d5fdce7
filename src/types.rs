pub const UNKNOWN: &str = "Unknown";

/// One aircraft observation taken from a state vector snapshot.
///
/// Field order matches the order keys are written out by the persistence layer.
#[derive(Debug, PartialEq, Clone, serde::Serialize)]
pub struct StateVector {
    pub callsign: String,
    pub icao24: String,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub altitude: Option<f64>,
    pub velocity: Option<f64>,
    pub heading: Option<f64>,
    pub vertical_rate: Option<f64>,
    #[serde(rename = "timestamp")]
    pub observed_at: chrono::NaiveDateTime,
}

impl StateVector {
    /// Creates a record with every optional field absent.
    #[must_use]
    pub fn new(icao24: String, callsign: Option<&str>, observed_at: chrono::NaiveDateTime) -> Self {
        StateVector {
            callsign: normalise_callsign(callsign),
            icao24,
            country: None,
            latitude: None,
            longitude: None,
            altitude: None,
            velocity: None,
            heading: None,
            vertical_rate: None,
            observed_at,
        }
    }

    #[must_use]
    pub fn country_or_unknown(&self) -> &str {
        self.country.as_deref().unwrap_or(UNKNOWN)
    }
}

fn normalise_callsign(callsign: Option<&str>) -> String {
    match callsign.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => String::from(UNKNOWN),
    }
}

/// Converts a unix timestamp in seconds to local calendar time.
#[must_use]
pub fn local_datetime_from_unix(seconds: i64) -> Option<chrono::NaiveDateTime> {
    chrono::DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&chrono::Local).naive_local())
}

#[cfg(test)]
mod tests {
    use super::{local_datetime_from_unix, StateVector, UNKNOWN};
    use chrono::TimeZone;

    fn some_time() -> chrono::NaiveDateTime {
        local_datetime_from_unix(1_700_000_000).expect("valid timestamp")
    }

    #[test]
    fn when_callsign_has_padding_then_it_is_trimmed() {
        let record = StateVector::new(String::from("3c6444"), Some("DLH9LF  "), some_time());
        assert_eq!(record.callsign, "DLH9LF");
    }

    #[test]
    fn when_callsign_is_absent_or_blank_then_unknown_is_used() {
        let absent = StateVector::new(String::from("a"), None, some_time());
        let blank = StateVector::new(String::from("b"), Some("        "), some_time());
        assert_eq!(absent.callsign, UNKNOWN);
        assert_eq!(blank.callsign, UNKNOWN);
    }

    #[test]
    fn when_country_is_absent_then_display_value_is_unknown() {
        let mut record = StateVector::new(String::from("a"), None, some_time());
        assert_eq!(record.country_or_unknown(), UNKNOWN);
        record.country = Some(String::from("Germany"));
        assert_eq!(record.country_or_unknown(), "Germany");
    }

    #[test]
    fn when_converting_unix_time_then_local_offset_is_applied() {
        let local = local_datetime_from_unix(1_700_000_000).expect("valid timestamp");
        let utc = chrono::DateTime::from_timestamp(1_700_000_000, 0)
            .expect("valid timestamp")
            .naive_utc();
        let offset_seconds = chrono::Local
            .offset_from_utc_datetime(&utc)
            .local_minus_utc();
        assert_eq!(
            local - utc,
            chrono::TimeDelta::seconds(i64::from(offset_seconds))
        );
    }
}
