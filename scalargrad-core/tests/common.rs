use scalargrad_core::creation::from_slice;
use scalargrad_core::Scalar;

// Shared across integration test crates; not every crate uses every helper.
#[allow(dead_code)]
pub(crate) fn leaves<const N: usize>(values: [f64; N]) -> [Scalar; N] {
    values.map(Scalar::new)
}

#[allow(dead_code)]
pub(crate) fn leaf_vec(values: &[f64]) -> Vec<Scalar> {
    from_slice(values)
}

/// Sum of squared differences, built from graph operations.
#[allow(dead_code)]
pub(crate) fn squared_error(predictions: &[Scalar], targets: &[f64]) -> Scalar {
    predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, &t)| {
            let diff = p - t;
            &diff * &diff
        })
        .sum()
}
