//! Coordinate geometry: label generation, parsing and placement expansion.
//!
//! Labels are a column letter followed by a 1-based row number ("A1", "J10").
//! The column alphabet caps the board at 26 cells per axis.

use serde::{Deserialize, Serialize};

/// Number of usable column letters; the hard cap on board dimensions.
pub const ALPHABET_LEN: usize = 26;

/// Direction a ship extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Cells advance along columns (letters), row fixed.
    Horizontal,
    /// Cells advance along rows (numbers), column fixed.
    Vertical,
}

/// `count` consecutive uppercase column letters starting `start` letters
/// after 'A'. `None` when the run would pass 'Z'.
pub fn column_labels(count: usize, start: usize) -> Option<Vec<char>> {
    if start + count > ALPHABET_LEN {
        return None;
    }
    Some(
        (start..start + count)
            .map(|i| (b'A' + i as u8) as char)
            .collect(),
    )
}

/// `count` consecutive row numbers starting at `start + 1`. Rows are
/// 1-based for end-user readability.
pub fn row_numbers(count: usize, start: usize) -> Vec<u32> {
    (start..start + count).map(|i| i as u32 + 1).collect()
}

/// Parse a label into (zero-based column index, 1-based row number).
/// Case-insensitive on the column letter.
pub fn parse_coordinate(label: &str) -> Option<(usize, u32)> {
    let mut chars = label.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() {
        return None;
    }
    let col = (col_char as u8 - b'A') as usize;
    let row: u32 = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((col, row))
}

/// Build a label from a zero-based column index and 1-based row number.
pub fn make_label(col: usize, row: u32) -> Option<String> {
    if col >= ALPHABET_LEN {
        return None;
    }
    Some(format!("{}{}", (b'A' + col as u8) as char, row))
}

/// The `length` cells a ship occupies starting at `start`.
///
/// Horizontal placements advance columns holding the row fixed; vertical
/// placements advance rows holding the column fixed. No board-bounds
/// checking happens here; callers compare the result against the generated
/// board. `None` when the start label is unparseable or a horizontal run
/// passes 'Z'.
pub fn cells_for_placement(
    start: &str,
    orientation: Orientation,
    length: usize,
) -> Option<Vec<String>> {
    let (col, row) = parse_coordinate(start)?;
    match orientation {
        Orientation::Horizontal => {
            let letters = column_labels(length, col)?;
            Some(letters.into_iter().map(|c| format!("{c}{row}")).collect())
        }
        Orientation::Vertical => {
            let rows = row_numbers(length, row as usize - 1);
            let letter = (b'A' + col as u8) as char;
            Some(rows.into_iter().map(|r| format!("{letter}{r}")).collect())
        }
    }
}
