//! Board generation, 1-D/2-D reshaping and the annotated debug rendering.

use crate::common::GameError;
use crate::coords::{self, ALPHABET_LEN};

/// Generate the canonical grid of coordinate labels. Row `r` (0-based)
/// holds `"A{r+1}"` through the last column letter for that row.
pub fn generate(width: usize, height: usize) -> Result<Vec<Vec<String>>, GameError> {
    if width == 0 || height == 0 || width > ALPHABET_LEN || height > ALPHABET_LEN {
        return Err(GameError::InvalidBoardConfig);
    }
    let letters = coords::column_labels(width, 0).ok_or(GameError::InvalidBoardConfig)?;
    let rows = coords::row_numbers(height, 0);
    Ok(rows
        .into_iter()
        .map(|r| letters.iter().map(|c| format!("{c}{r}")).collect())
        .collect())
}

/// Flatten a grid into the 1-D cell sequence, row-major.
pub fn flatten(grid: &[Vec<String>]) -> Vec<String> {
    grid.iter().flatten().cloned().collect()
}

/// Chunk a 1-D cell sequence back into rows of `width`. Inverse of
/// [`flatten`] for sequences whose length is a multiple of `width`.
pub fn reshape(cells: &[String], width: usize) -> Vec<Vec<String>> {
    cells.chunks(width).map(|row| row.to_vec()).collect()
}

/// Render the board with ships and shots superimposed, for status output
/// and debugging only; never used for decisions.
///
/// Cells hit by a shot on a ship render `[H]`, missed shots `[M]`,
/// un-shot ship cells keep their label in brackets (`[A1]`), untouched
/// cells stay bare. Cells are padded to a fixed width, joined by tabs,
/// rows by newlines.
pub fn render(grid: &[Vec<String>], ship_cells: &[String], shot_cells: &[String]) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    let shot = shot_cells.contains(cell);
                    let ship = ship_cells.contains(cell);
                    let marker = match (shot, ship) {
                        (true, true) => "[H]".to_string(),
                        (true, false) => "[M]".to_string(),
                        (false, true) => format!("[{cell}]"),
                        (false, false) => cell.clone(),
                    };
                    format!("{marker:>5}")
                })
                .collect::<Vec<_>>()
                .join("\t")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
