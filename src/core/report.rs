use crate::domain::model::ScoutReport;
use std::io::{self, Write};

/// Render the report: one `"<opponent> : [..]"` line per opponent in
/// extraction order, then the sorted union of all prior match numbers.
pub fn render<W: Write>(report: &ScoutReport, out: &mut W) -> io::Result<()> {
    for opponent in &report.opponents {
        writeln!(out, "{} : {:?}", opponent.opponent, opponent.prior_matches)?;
    }
    writeln!(out, "{:?}", report.all_matches)
}
