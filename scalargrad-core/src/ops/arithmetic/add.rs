// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::ScalarOp;
use crate::scalar::Scalar;

// --- Forward Operation ---

/// `a + b`. Both operands receive the upstream gradient unchanged.
pub fn add_op(a: &Scalar, b: &Scalar) -> Scalar {
    Scalar::from_op(a.value() + b.value(), ScalarOp::Add(a.clone(), b.clone()))
}

impl_binary_operator!(Add, add, add_op);

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
