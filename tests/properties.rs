use bayes_net::structures::{factor::Factor, literal::Literal, variable::Variable};
use proptest::prelude::*;

fn scope(size: usize) -> Vec<Variable> {
    (0..size).map(|index| format!("v{index}")).collect()
}

/// A scope size together with a weight for each row of a factor over a scope of that size.
fn sized_weights(max: usize) -> impl Strategy<Value = (usize, Vec<f64>)> {
    (0..=max).prop_flat_map(|size| {
        (
            Just(size),
            prop::collection::vec(0.01_f64..10.0, 1_usize << size),
        )
    })
}

proptest! {
    #[test]
    fn table_size(size in 0_usize..12) {
        let factor = Factor::blank(scope(size)).unwrap();
        prop_assert_eq!(factor.row_count(), 1 << size);

        if size > 0 {
            let marginal = factor.marginalize("v0").unwrap();
            prop_assert_eq!(marginal.row_count(), 1 << (size - 1));
        }
    }

    #[test]
    fn join_then_marginalize_child(prior in 0.0_f64..=1.0, given_positive in 0.0_f64..=1.0, given_negative in 0.0_f64..=1.0) {
        let parent = Factor::from_weights(scope(1), vec![prior, 1.0 - prior]).unwrap();
        let child = Factor::from_weights(
            vec!["v0".to_string(), "child".to_string()],
            vec![given_positive, 1.0 - given_positive, given_negative, 1.0 - given_negative],
        )
        .unwrap();

        let recovered = parent.join(&child).unwrap().marginalize("child").unwrap();

        prop_assert_eq!(recovered.scope(), parent.scope());
        for (a, b) in recovered.weights().iter().zip(parent.weights()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn normalize_is_idempotent((size, weights) in sized_weights(6).prop_filter("non-empty scope", |(size, _)| *size > 0)) {
        let factor = Factor::from_weights(scope(size), weights).unwrap();

        let once = factor.normalized().unwrap();
        let twice = once.normalized().unwrap();

        for (a, b) in once.weights().iter().zip(twice.weights()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
        for pair in once.weights().chunks_exact(2) {
            prop_assert!((pair[0] + pair[1] - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn clamp_preserves_agreeing_rows((size, weights) in sized_weights(6).prop_filter("non-empty scope", |(size, _)| *size > 0), position in 0_usize..6, polarity in any::<bool>()) {
        let position = position % size;
        let factor = Factor::from_weights(scope(size), weights).unwrap();
        let literal = Literal::new(format!("v{position}"), polarity);

        let clamped = factor.assign(&literal).unwrap();
        let restricted = clamped.project(vec![format!("v{position}")]).unwrap();

        prop_assert!((clamped.total() - restricted.total()).abs() < 1e-9);
        let zeroed = if polarity { 1 } else { 0 };
        prop_assert_eq!(restricted.weights()[zeroed], 0.0);
    }
}
