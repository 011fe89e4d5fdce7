pub mod builder;
mod constants;

use crate::parser::builder::{build_state_vector_from_row, StateVectorBuildError};
use crate::types::StateVector;

/// Converts the raw `states` rows of one snapshot into records.
///
/// Rows without an icao24 address are skipped. Rows that are otherwise
/// malformed are discarded one by one so the rest of the snapshot survives.
#[must_use]
pub fn parse_state_vectors(
    rows: &[Vec<serde_json::Value>],
    fetched_at: chrono::NaiveDateTime,
) -> Vec<StateVector> {
    rows.iter()
        .filter_map(
            |row| match build_state_vector_from_row(row, fetched_at) {
                Ok(state_vector) => Some(state_vector),
                Err(StateVectorBuildError::MissingICAO24) => None,
                Err(err) => {
                    log::debug!("Discarding malformed state vector: {err}");
                    None
                }
            },
        )
        .collect()
}
