use std::io::{self, Write};

use crate::rank::Suggestion;

/// Writes one block per passenger: the passenger's finish point followed by
/// the finish points of the suggested drivers, indented, nearest first.
///
/// ```text
/// Passenger point: 59.9386, 30.3141
///   59.9311, 30.3609
///   60.0026, 30.2954
/// ```
pub fn write_report<W: Write>(mut out: W, suggestions: &[Suggestion]) -> io::Result<()> {
    for suggestion in suggestions {
        writeln!(out, "Passenger point: {}", suggestion.passenger.finish_point)?;
        for driver in &suggestion.drivers {
            writeln!(out, "  {}", driver.finish_point)?;
        }
    }

    out.flush()
}
