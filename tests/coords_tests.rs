use broadside::coords::{
    cells_for_placement, column_labels, make_label, parse_coordinate, row_numbers,
};
use broadside::Orientation;

#[test]
fn column_labels_from_a() {
    assert_eq!(column_labels(4, 0).unwrap(), vec!['A', 'B', 'C', 'D']);
}

#[test]
fn column_labels_with_offset() {
    assert_eq!(column_labels(3, 7).unwrap(), vec!['H', 'I', 'J']);
}

#[test]
fn column_labels_past_z_fails() {
    assert_eq!(column_labels(26, 0).unwrap().len(), 26);
    assert!(column_labels(27, 0).is_none());
    assert!(column_labels(2, 25).is_none());
}

#[test]
fn row_numbers_are_one_based() {
    assert_eq!(row_numbers(3, 0), vec![1, 2, 3]);
    assert_eq!(row_numbers(2, 9), vec![10, 11]);
}

#[test]
fn parse_coordinate_basic() {
    assert_eq!(parse_coordinate("A1"), Some((0, 1)));
    assert_eq!(parse_coordinate("J10"), Some((9, 10)));
    assert_eq!(parse_coordinate("c4"), Some((2, 4)));
}

#[test]
fn parse_coordinate_rejects_garbage() {
    assert_eq!(parse_coordinate(""), None);
    assert_eq!(parse_coordinate("11"), None);
    assert_eq!(parse_coordinate("A"), None);
    assert_eq!(parse_coordinate("A0"), None);
    assert_eq!(parse_coordinate("AB"), None);
}

#[test]
fn make_label_round_trips() {
    let label = make_label(7, 10).unwrap();
    assert_eq!(label, "H10");
    assert_eq!(parse_coordinate(&label), Some((7, 10)));
    assert!(make_label(26, 1).is_none());
}

#[test]
fn horizontal_placement_advances_columns() {
    assert_eq!(
        cells_for_placement("A1", Orientation::Horizontal, 4).unwrap(),
        vec!["A1", "B1", "C1", "D1"]
    );
}

#[test]
fn vertical_placement_advances_rows() {
    assert_eq!(
        cells_for_placement("C4", Orientation::Vertical, 3).unwrap(),
        vec!["C4", "C5", "C6"]
    );
}

#[test]
fn placement_start_is_case_insensitive() {
    assert_eq!(
        cells_for_placement("b2", Orientation::Horizontal, 2).unwrap(),
        vec!["B2", "C2"]
    );
}

#[test]
fn horizontal_placement_past_z_fails() {
    assert!(cells_for_placement("Z1", Orientation::Horizontal, 2).is_none());
}

#[test]
fn vertical_placement_has_no_row_cap_here() {
    // Bounds against the board are the validator's job, not geometry's.
    assert_eq!(
        cells_for_placement("A26", Orientation::Vertical, 2).unwrap(),
        vec!["A26", "A27"]
    );
}
