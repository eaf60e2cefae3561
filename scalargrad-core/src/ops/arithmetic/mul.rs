use crate::autograd::ScalarOp;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `a * b`. `a` receives `g * b`, `b` receives `g * a`.
pub fn mul_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() * b.value(), ScalarOp::Mul(a.clone(), b.clone()))
}

impl_binary_operator!(Mul, mul, mul_op);

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
