use broadside::{flatten, generate, render, reshape, GameError};

#[test]
fn generate_ten_by_ten() {
    let grid = generate(10, 10).unwrap();
    assert_eq!(grid.len(), 10);
    assert_eq!(grid[0][0], "A1");
    assert_eq!(grid[0][9], "J1");
    assert_eq!(grid[9][0], "A10");
    assert_eq!(grid[9][9], "J10");
}

#[test]
fn generate_rejects_out_of_range_dimensions() {
    assert_eq!(generate(27, 10).unwrap_err(), GameError::InvalidBoardConfig);
    assert_eq!(generate(10, 27).unwrap_err(), GameError::InvalidBoardConfig);
    assert_eq!(generate(0, 10).unwrap_err(), GameError::InvalidBoardConfig);
    assert!(generate(26, 26).is_ok());
}

#[test]
fn flatten_is_row_major() {
    let grid = generate(3, 2).unwrap();
    assert_eq!(flatten(&grid), vec!["A1", "B1", "C1", "A2", "B2", "C2"]);
}

#[test]
fn reshape_inverts_flatten() {
    let grid = generate(5, 4).unwrap();
    assert_eq!(reshape(&flatten(&grid), 5), grid);
}

#[test]
fn render_superimposes_ships_and_shots() {
    let grid = generate(2, 2).unwrap();
    let ship_cells = vec!["A1".to_string()];
    let shot_cells = vec!["A1".to_string(), "B2".to_string()];
    let text = render(&grid, &ship_cells, &shot_cells);
    // A1 was shot and occupied: hit. B2 shot only: miss. B1/A2 untouched.
    assert_eq!(text, "  [H]\t   B1\n   A2\t  [M]");
}

#[test]
fn render_brackets_unshot_ship_cells() {
    let grid = generate(2, 1).unwrap();
    let text = render(&grid, &["B1".to_string()], &[]);
    assert_eq!(text, "   A1\t [B1]");
}
