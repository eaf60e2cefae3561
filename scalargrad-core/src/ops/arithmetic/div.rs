use crate::autograd::ScalarOp;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use num_traits::Zero;

// --- Forward Operation ---

/// `a / b`.
///
/// Backward: `a` receives `g / b`, `b` receives `g * (-a / b²)`.
///
/// # Errors
/// [`ScalarGradError::DivisionByZero`] if `b.value() == 0` (either sign of
/// zero). No node is created in that case.
pub fn div_op(a: &Scalar, b: &Scalar) -> Result<Scalar, ScalarGradError> {
    let divisor = b.value();
    if divisor.is_zero() {
        return Err(ScalarGradError::DivisionByZero);
    }
    Ok(Scalar::from_op(
        a.value() / divisor,
        ScalarOp::Div(a.clone(), b.clone()),
    ))
}

/// Backs the `/` operator.
///
/// # Panics
/// On a zero divisor, like integer division. Use [`div_op`] to get a
/// `Result` instead.
fn div_operator(a: &Scalar, b: &Scalar) -> Scalar {
    match div_op(a, b) {
        Ok(result) => result,
        Err(err) => panic!("{}", err),
    }
}

impl_binary_operator!(Div, div, div_operator);

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
