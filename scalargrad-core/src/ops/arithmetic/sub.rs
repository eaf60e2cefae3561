use crate::autograd::ScalarOp;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `a - b`. `a` receives `+g`, `b` receives `-g`.
pub fn sub_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() - b.value(), ScalarOp::Sub(a.clone(), b.clone()))
}

impl_binary_operator!(Sub, sub, sub_op);

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
