//! Decoding posted form fields into a raw board.
//!
//! Each cell travels as `<field>[<row>][<col>]=<value>`: hidden inputs for
//! occupied squares and a checkbox for the square the human just picked.

use heuristic_tictactoe::RawBoard;
use tracing::{debug, instrument, warn};

/// Collects every `<field>[row][col]` pair into a [`RawBoard`].
///
/// Pairs for other fields are skipped. Keys for this field whose indices
/// are not numbers are logged and dropped.
#[instrument(skip(pairs), fields(pairs = pairs.len()))]
pub fn parse_board(field_name: &str, pairs: &[(String, String)]) -> RawBoard {
    let mut raw = RawBoard::new();
    for (key, value) in pairs {
        let Some(rest) = key.strip_prefix(field_name) else {
            debug!(%key, "Ignoring unrelated field");
            continue;
        };
        match parse_indices(rest) {
            Some((row, col)) => raw.insert(row, col, value.as_str()),
            None => warn!(%key, "Malformed board field"),
        }
    }
    raw
}

/// Parses `[row][col]`.
fn parse_indices(s: &str) -> Option<(usize, usize)> {
    let s = s.strip_prefix('[')?;
    let (row, s) = s.split_once("][")?;
    let col = s.strip_suffix(']')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

/// Form field name for a cell.
pub fn cell_field(field_name: &str, row: usize, col: usize) -> String {
    format!("{}[{}][{}]", field_name, row, col)
}
