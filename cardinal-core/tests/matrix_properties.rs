//! Property tests for FeatureMatrix row operations.

use proptest::prelude::*;

use cardinal_core::FeatureMatrix;

fn matrix() -> impl Strategy<Value = FeatureMatrix> {
    (1usize..5, 0usize..12).prop_flat_map(|(dims, rows)| {
        prop::collection::vec(-1e3f64..1e3, dims * rows)
            .prop_map(move |data| FeatureMatrix::new(data, dims).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_vstack_keeps_rows_in_order(a in matrix(), b in matrix()) {
        prop_assume!(a.n_features() == b.n_features());
        let stacked = a.vstack(&b).unwrap();
        prop_assert_eq!(stacked.n_rows(), a.n_rows() + b.n_rows());
        for (i, row) in a.rows().enumerate() {
            prop_assert_eq!(stacked.row(i), row);
        }
        for (i, row) in b.rows().enumerate() {
            prop_assert_eq!(stacked.row(a.n_rows() + i), row);
        }
    }

    #[test]
    fn prop_select_rows_copies_requested_rows(m in matrix(), picks in prop::collection::vec(0usize..100, 0..8)) {
        let result = m.select_rows(&picks);
        if picks.iter().all(|&i| i < m.n_rows()) {
            let sub = result.unwrap();
            prop_assert_eq!(sub.n_rows(), picks.len());
            for (k, &i) in picks.iter().enumerate() {
                prop_assert_eq!(sub.row(k), m.row(i));
            }
        } else {
            prop_assert!(result.is_err());
        }
    }
}
