//! Randomized properties of the SVM loss.

mod common;

use common::{assert_close, assert_matrix_close};
use hinge_svm::{svm_loss, Matrix, SvmStrategy};
use proptest::prelude::*;

/// (W, X, y) with N in 1..8, D in 1..6, C in 2..6 and entries in [-3, 3].
fn problem() -> impl Strategy<Value = (Matrix, Matrix, Vec<usize>)> {
    (1usize..8, 1usize..6, 2usize..6).prop_flat_map(|(n, d, c)| {
        (
            prop::collection::vec(prop::collection::vec(-3.0f64..3.0, c), d),
            prop::collection::vec(prop::collection::vec(-3.0f64..3.0, d), n),
            prop::collection::vec(0..c, n),
        )
            .prop_map(|(w, x, y)| {
                (Matrix::from_data(w).unwrap(), Matrix::from_data(x).unwrap(), y)
            })
    })
}

proptest! {
    #[test]
    fn prop_strategies_agree((w, x, y) in problem(), reg in 0.0f64..2.0) {
        let (l1, g1) = svm_loss(&w, &x, &y, reg, SvmStrategy::Naive).unwrap();
        let (l2, g2) = svm_loss(&w, &x, &y, reg, SvmStrategy::Vectorized).unwrap();
        assert_close(l1, l2, 1e-7, "loss");
        assert_matrix_close(&g1, &g2, 1e-7, "grad");
    }

    #[test]
    fn prop_loss_is_non_negative((w, x, y) in problem(), reg in 0.0f64..2.0) {
        for strategy in [SvmStrategy::Naive, SvmStrategy::Vectorized] {
            let (loss, grad) = svm_loss(&w, &x, &y, reg, strategy).unwrap();
            prop_assert!(loss >= 0.0);
            prop_assert_eq!(grad.shape(), w.shape());
        }
    }

    #[test]
    fn prop_regularization_is_additive((w, x, y) in problem(), reg in 0.0f64..2.0) {
        let sum_sq: f64 = w.data.iter().flatten().map(|v| v * v).sum();
        for strategy in [SvmStrategy::Naive, SvmStrategy::Vectorized] {
            let (l0, g0) = svm_loss(&w, &x, &y, 0.0, strategy).unwrap();
            let (lr, gr) = svm_loss(&w, &x, &y, reg, strategy).unwrap();
            assert_close(lr - l0, 0.5 * reg * sum_sq, 1e-9, "reg loss");
            let diff = Matrix::from_data(
                gr.data.iter().zip(g0.data.iter())
                    .map(|(a, b)| a.iter().zip(b.iter()).map(|(p, q)| p - q).collect())
                    .collect(),
            ).unwrap();
            assert_matrix_close(&diff, &w.scale(reg), 1e-9, "reg grad");
        }
    }

    #[test]
    fn prop_loss_grows_with_reg((w, x, y) in problem(), lo in 0.0f64..1.0, step in 0.0f64..1.0) {
        let (l_lo, _) = svm_loss(&w, &x, &y, lo, SvmStrategy::Vectorized).unwrap();
        let (l_hi, _) = svm_loss(&w, &x, &y, lo + step, SvmStrategy::Vectorized).unwrap();
        prop_assert!(l_hi >= l_lo);
    }
}
