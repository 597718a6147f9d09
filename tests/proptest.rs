//! Property-based tests for spenn using proptest.

use proptest::prelude::*;
use spenn::data::utilities::{
    calculate_column_total, calculate_row_total, create_number_array_2d,
    get_cumulative_percentages,
};
use spenn::{DefaultKeyedValues, DefaultKeyedValues2D, KeyedValues, Range};

fn grid_from(cells: &[Vec<Option<f64>>]) -> DefaultKeyedValues2D<usize, usize> {
    let mut grid = DefaultKeyedValues2D::new();
    for (row, values) in cells.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            grid.set_value(row, column, *value);
        }
    }
    grid
}

fn ordered_pair() -> impl Strategy<Value = (f64, f64)> {
    (-1e6f64..1e6, -1e6f64..1e6).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

proptest! {
    /// Column totals match a direct sum with absent cells as zero.
    #[test]
    fn column_total_matches_sum(
        cells in prop::collection::vec(
            prop::collection::vec(prop::option::of(-1e3f64..1e3), 4),
            1..20,
        ),
        column in 0usize..4,
    ) {
        let grid = grid_from(&cells);
        let expected: f64 = cells.iter().filter_map(|row| row[column]).sum();
        let total = calculate_column_total(Some(&grid), column as isize).unwrap();
        prop_assert!((total - expected).abs() < 1e-6);
    }

    /// Row totals reject every index at or past the row count.
    #[test]
    fn row_total_rejects_out_of_range(rows in 1usize..10, extra in 0isize..10) {
        let cells = vec![vec![Some(1.0)]; rows];
        let grid = grid_from(&cells);
        prop_assert!(calculate_row_total(Some(&grid), rows as isize + extra).is_err());
        prop_assert!(calculate_row_total(Some(&grid), -1 - extra).is_err());
    }

    /// Jagged rows keep their lengths.
    #[test]
    fn number_array_2d_keeps_shape(
        rows in prop::collection::vec(prop::collection::vec(-1e3f64..1e3, 0..8), 0..8),
    ) {
        let input: Vec<Option<Vec<f64>>> = rows.iter().cloned().map(Some).collect();
        let result = create_number_array_2d(Some(&input[..])).unwrap();
        prop_assert_eq!(result.len(), rows.len());
        for (out, inp) in result.iter().zip(&rows) {
            prop_assert_eq!(out.len(), inp.len());
        }
    }

    /// The last cumulative share is exactly one for positive data.
    #[test]
    fn cumulative_ends_at_one(values in prop::collection::vec(0.01f64..1e3, 1..30)) {
        let data: DefaultKeyedValues<usize> = values.iter().copied().enumerate().collect();
        let result = get_cumulative_percentages(Some(&data)).unwrap();
        prop_assert_eq!(result.item_count(), values.len());
        prop_assert_eq!(result.value(values.len() - 1), Some(1.0));
        for i in 1..values.len() {
            prop_assert!(result.value(i).unwrap() >= result.value(i - 1).unwrap());
        }
    }

    /// `contains` agrees with the closed-interval definition.
    #[test]
    fn contains_is_closed((lower, upper) in ordered_pair(), v in -2e6f64..2e6) {
        let range = Range::new(lower, upper);
        prop_assert_eq!(range.contains(v), lower <= v && v <= upper);
        prop_assert!(range.contains(lower) && range.contains(upper));
    }

    /// Intersection is symmetric for well-formed ranges.
    #[test]
    fn intersects_is_symmetric(a in ordered_pair(), b in ordered_pair()) {
        let ra = Range::new(a.0, a.1);
        let rb = Range::new(b.0, b.1);
        prop_assert_eq!(ra.intersects(b.0, b.1), rb.intersects(a.0, a.1));
    }

    /// The combined range covers both inputs.
    #[test]
    fn combine_covers_inputs(a in ordered_pair(), b in ordered_pair()) {
        let ra = Range::new(a.0, a.1);
        let rb = Range::new(b.0, b.1);
        let c = Range::combine(Some(ra), Some(rb)).unwrap();
        prop_assert!(c.contains(a.0) && c.contains(a.1));
        prop_assert!(c.contains(b.0) && c.contains(b.1));
    }

    /// Without zero crossing, no bound changes sign.
    #[test]
    fn shift_keeps_sign((lower, upper) in ordered_pair(), delta in -2e6f64..2e6) {
        let base = Range::new(lower, upper);
        let shifted = Range::shift(Some(&base), delta, false).unwrap();
        for (before, after) in [(lower, shifted.lower_bound()), (upper, shifted.upper_bound())] {
            if before > 0.0 {
                prop_assert!(after >= 0.0);
            } else if before < 0.0 {
                prop_assert!(after <= 0.0);
            }
        }
    }
}
