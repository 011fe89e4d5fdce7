use crate::types::StateVector;
use std::io::Write;

pub const DEFAULT_MAX_ROWS: usize = 50;
const NOT_AVAILABLE: &str = "N/A";
const RULE_WIDTH: usize = 70;

/// Prints state vectors as a fixed-width table.
pub struct TerminalRenderer {
    max_rows: usize,
}

impl TerminalRenderer {
    #[must_use]
    pub fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    pub fn render<W: Write>(
        &self,
        state_vectors: &[StateVector],
        out: &mut W,
    ) -> std::io::Result<()> {
        if state_vectors.is_empty() {
            writeln!(out, "No aircraft data available")?;
            return Ok(());
        }

        writeln!(
            out,
            "\n{0:<10} {1:<20} {2:<10} {3:<10} {4:<10}",
            "Callsign", "Country", "Altitude", "Velocity", "Heading"
        )?;
        writeln!(out, "{0}", "-".repeat(RULE_WIDTH))?;

        for state_vector in state_vectors.iter().take(self.max_rows) {
            writeln!(
                out,
                "{0:<10} {1:<20} {2:<10} {3:<10} {4:<10}",
                state_vector.callsign,
                state_vector.country_or_unknown(),
                format_altitude(state_vector.altitude),
                format_velocity(state_vector.velocity),
                format_heading(state_vector.heading),
            )?;
        }

        if state_vectors.len() > self.max_rows {
            writeln!(
                out,
                "\n... and {0} more aircraft",
                state_vectors.len() - self.max_rows
            )?;
        }

        writeln!(out, "\nTotal aircraft tracked: {0}", state_vectors.len())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        TerminalRenderer::new(DEFAULT_MAX_ROWS)
    }
}

fn format_altitude(altitude: Option<f64>) -> String {
    altitude.map_or_else(|| String::from(NOT_AVAILABLE), |metres| format!("{metres:.0}m"))
}

fn format_velocity(velocity: Option<f64>) -> String {
    velocity.map_or_else(
        || String::from(NOT_AVAILABLE),
        |metres_per_second| format!("{metres_per_second:.1}m/s"),
    )
}

fn format_heading(heading: Option<f64>) -> String {
    heading.map_or_else(|| String::from(NOT_AVAILABLE), |degrees| format!("{degrees:.0}°"))
}

#[cfg(test)]
mod tests {
    use super::TerminalRenderer;
    use crate::types::{local_datetime_from_unix, StateVector};

    fn record(icao24: &str) -> StateVector {
        let mut state_vector = StateVector::new(
            icao24.to_string(),
            Some("TEST1"),
            local_datetime_from_unix(1_700_000_000).expect("valid timestamp"),
        );
        state_vector.country = Some(String::from("Austria"));
        state_vector.altitude = Some(10_000.4);
        state_vector.velocity = Some(200.26);
        state_vector.heading = Some(123.0);
        state_vector
    }

    fn render_to_string(renderer: &TerminalRenderer, state_vectors: &[StateVector]) -> String {
        let mut out = Vec::new();
        renderer
            .render(state_vectors, &mut out)
            .expect("writing to a Vec does not fail");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn when_no_records_then_only_notice_is_printed() {
        let output = render_to_string(&TerminalRenderer::default(), &[]);
        assert_eq!(output, "No aircraft data available\n");
    }

    #[test]
    fn when_rendering_record_then_columns_are_formatted() {
        let output = render_to_string(&TerminalRenderer::default(), &[record("abc")]);
        let row = output
            .lines()
            .find(|line| line.starts_with("TEST1"))
            .expect("detail row");
        assert_eq!(
            row,
            "TEST1      Austria              10000m     200.3m/s   123°      "
        );
        assert!(output.contains("Callsign   Country              Altitude   Velocity   Heading"));
        assert!(output.ends_with("\nTotal aircraft tracked: 1\n"));
    }

    #[test]
    fn when_heading_is_zero_then_zero_degrees_is_printed() {
        let mut state_vector = record("abc");
        state_vector.heading = Some(0.0);
        let output = render_to_string(&TerminalRenderer::default(), &[state_vector]);
        assert!(output.contains(" 0°"));
        assert!(!output.contains("N/A"));
    }

    #[test]
    fn when_optional_fields_are_absent_then_not_available_is_printed() {
        let mut state_vector = record("abc");
        state_vector.country = None;
        state_vector.altitude = None;
        state_vector.velocity = None;
        state_vector.heading = None;
        let output = render_to_string(&TerminalRenderer::default(), &[state_vector]);
        let row = output
            .lines()
            .find(|line| line.starts_with("TEST1"))
            .expect("detail row");
        assert_eq!(row.matches("N/A").count(), 3);
        assert!(row.contains("Unknown"));
    }

    #[test]
    fn when_altitude_and_velocity_are_zero_then_values_are_printed() {
        let mut state_vector = record("abc");
        state_vector.altitude = Some(0.0);
        state_vector.velocity = Some(0.0);
        let output = render_to_string(&TerminalRenderer::default(), &[state_vector]);
        assert!(output.contains(" 0m "));
        assert!(output.contains(" 0.0m/s "));
    }

    #[test]
    fn when_more_than_fifty_records_then_rest_is_summarised() {
        let state_vectors: Vec<StateVector> =
            (0..51).map(|index| record(&format!("{index:06x}"))).collect();
        let output = render_to_string(&TerminalRenderer::default(), &state_vectors);

        let detail_rows = output
            .lines()
            .filter(|line| line.starts_with("TEST1"))
            .count();
        assert_eq!(detail_rows, 50);
        assert_eq!(output.matches("... and 1 more aircraft").count(), 1);
        assert!(output.contains("Total aircraft tracked: 51"));
    }

    #[test]
    fn when_exactly_fifty_records_then_no_summary_is_printed() {
        let state_vectors: Vec<StateVector> =
            (0..50).map(|index| record(&format!("{index:06x}"))).collect();
        let output = render_to_string(&TerminalRenderer::default(), &state_vectors);
        assert!(!output.contains("more aircraft"));
        assert!(output.contains("Total aircraft tracked: 50"));
    }
}
