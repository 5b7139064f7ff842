//! Turning submitted board data into a dense [`Board`].
//!
//! Clients re-submit the whole board on every turn. What arrives is a
//! sparse `row -> col -> value` map that may be missing entries, list them
//! out of order, or carry values that are not numbers at all. None of that
//! is an error: anything that does not read as a mark becomes empty.

use crate::types::{Board, Cell, Coord, GRID_SIZE};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// A single submitted cell value.
///
/// Deserialization never fails on a well-formed document: anything that is
/// neither an integer nor a string lands in [`RawValue::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum RawValue {
    /// Already numeric.
    Number(i64),
    /// Text as it came off the wire.
    Text(String),
    /// Booleans, nulls, floats, nested data, out-of-range integers.
    #[from(skip)]
    Other,
}

impl RawValue {
    /// Integer reading of the value.
    ///
    /// Text is read as a leading integer: optional whitespace, an optional
    /// sign, then digits. `"-1"` is `-1`, `"1abc"` is `1`, `"abc"` is `0`.
    /// [`RawValue::Other`] reads as `0`.
    pub fn as_int(&self) -> i64 {
        match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => leading_int(s),
            RawValue::Other => 0,
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Number(i64),
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Number(n) => RawValue::Number(n),
            Wire::Text(s) => RawValue::Text(s),
            Wire::Other(_) => RawValue::Other,
        })
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if negative { -value } else { value }
}

/// Sparse board as submitted by a client.
///
/// Indices are kept as given; anything outside the grid is dropped by
/// [`normalize`]. When read from JSON, keys that are not non-negative
/// integers and rows that are not objects are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawBoard {
    rows: BTreeMap<usize, BTreeMap<usize, RawValue>>,
}

impl RawBoard {
    /// Creates an empty raw board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the value submitted for `(row, col)`, replacing any earlier one.
    pub fn insert(&mut self, row: usize, col: usize, value: impl Into<RawValue>) {
        self.rows.entry(row).or_default().insert(col, value.into());
    }

    /// Value submitted for `(row, col)`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<&RawValue> {
        self.rows.get(&row).and_then(|cols| cols.get(&col))
    }

    /// Number of submitted values.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    /// True when nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for RawBoard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire<T> {
            Map(BTreeMap<String, T>),
            Other(IgnoredAny),
        }

        impl<T> Wire<T> {
            fn into_entries(self) -> impl Iterator<Item = (usize, T)> {
                let map = match self {
                    Wire::Map(map) => map,
                    Wire::Other(_) => BTreeMap::new(),
                };
                map.into_iter().filter_map(|(key, value)| match key.trim().parse() {
                    Ok(index) => Some((index, value)),
                    Err(_) => {
                        trace!(%key, "Skipping non-index key");
                        None
                    }
                })
            }
        }

        let mut raw = RawBoard::new();
        for (row, cols) in Wire::<Wire<RawValue>>::deserialize(deserializer)?.into_entries() {
            for (col, value) in cols.into_entries() {
                raw.insert(row, col, value);
            }
        }
        Ok(raw)
    }
}

impl From<&Board> for RawBoard {
    fn from(board: &Board) -> Self {
        let mut raw = RawBoard::new();
        for at in Board::coords() {
            raw.insert(at.row(), at.col(), board.get(at).value());
        }
        raw
    }
}

/// Builds a dense board from a sparse submission.
///
/// Each of the nine squares reads the submitted value if present and
/// is empty otherwise.
#[instrument(skip(raw), fields(submitted = raw.len()))]
pub fn normalize(raw: &RawBoard) -> Board {
    let mut board = Board::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let Some(value) = raw.get(row, col) else {
                continue;
            };
            if let Some(at) = Coord::new(row, col) {
                board.set(at, Cell::from_value(value.as_int()));
            }
        }
    }
    trace!(%board, "Normalized board");
    board
}
