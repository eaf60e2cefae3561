use crate::autograd::ScalarOp;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// Rectified linear unit: `max(0, a)`.
///
/// The input receives the upstream gradient only when the *output* is
/// strictly positive; the sub-gradient at exactly 0 is 0.
pub fn relu_op(a: &Scalar) -> Scalar {
    let x = a.value();
    let value = if x < 0.0 { 0.0 } else { x };
    Scalar::from_op(value, ScalarOp::Relu(a.clone()))
}

impl Scalar {
    /// Applies ReLU to this node. See [`relu_op`].
    pub fn relu(&self) -> Scalar {
        relu_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
