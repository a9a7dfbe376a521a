use std::collections::HashSet;

use broadside::coords::parse_coordinate;
use broadside::{flatten, generate, reshape};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_labels_are_unique_and_parseable(w in 1usize..=26, h in 1usize..=26) {
        let grid = generate(w, h).unwrap();
        let cells = flatten(&grid);
        prop_assert_eq!(cells.len(), w * h);

        let unique: HashSet<&String> = cells.iter().collect();
        prop_assert_eq!(unique.len(), w * h);

        for (i, cell) in cells.iter().enumerate() {
            let (col, row) = parse_coordinate(cell).unwrap();
            prop_assert_eq!(col, i % w);
            prop_assert_eq!(row as usize, i / w + 1);
        }
    }

    #[test]
    fn reshape_flatten_roundtrip(w in 1usize..=26, h in 1usize..=26) {
        let cells = flatten(&generate(w, h).unwrap());
        prop_assert_eq!(flatten(&reshape(&cells, w)), cells);
    }
}
