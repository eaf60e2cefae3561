use crate::scalar::Scalar;

/// Checks that each node's gradient is within `tolerance` of the expected one.
/// Panics with the offending index otherwise.
pub fn check_grads_near(nodes: &[Scalar], expected_grads: &[f64], tolerance: f64) {
    assert_eq!(
        nodes.len(),
        expected_grads.len(),
        "Gradient count mismatch"
    );

    for (i, (node, expected)) in nodes.iter().zip(expected_grads.iter()).enumerate() {
        let diff = (node.grad() - *expected).abs();
        if diff > tolerance {
            panic!(
                "Gradient mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i,
                node.grad(),
                expected,
                diff,
                tolerance
            );
        }
    }
}

/// Checks a node's value within `tolerance`.
pub fn check_value_near(node: &Scalar, expected: f64, tolerance: f64) {
    let diff = (node.value() - expected).abs();
    assert!(
        diff <= tolerance,
        "Value mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
        node.value(),
        expected,
        diff,
        tolerance
    );
}
