use crate::creation::from_slice;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check needs at least one input")]
    EmptyInput,

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` receives one fresh leaf per entry of `inputs` and returns the
/// output node. The analytical gradient of each leaf comes from a single
/// `backward()` on that output; the numerical gradient is
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`, re-running `func` on
/// new leaves each time so no gradient state leaks between evaluations.
///
/// Gradients match when they are within `tolerance` absolutely or relatively.
///
/// Near non-differentiable points (ReLU at 0) the two gradients legitimately
/// disagree and a [`GradCheckError::GradientMismatch`] is reported.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    if inputs.is_empty() {
        return Err(GradCheckError::EmptyInput);
    }

    // --- 1. Analytical gradients ---
    let leaves = from_slice(inputs);
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;

    // --- 2. Numerical gradients, one input at a time ---
    for (input_index, leaf) in leaves.iter().enumerate() {
        let analytical_grad = leaf.grad();

        let loss_plus = evaluate_perturbed(&func, inputs, input_index, epsilon)?;
        let loss_minus = evaluate_perturbed(&func, inputs, input_index, -epsilon)?;
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "grad_check input {}: analytical={:?} numerical={:?}",
            input_index, analytical_grad, numerical_grad
        );

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Runs `func` forward on fresh leaves with `inputs[index]` shifted by `delta`.
fn evaluate_perturbed<F>(
    func: &F,
    inputs: &[f64],
    index: usize,
    delta: f64,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Scalar]) -> Result<Scalar, ScalarGradError>,
{
    let mut perturbed = inputs.to_vec();
    perturbed[index] += delta;
    let leaves = from_slice(&perturbed);
    func(&leaves)
        .map(|out| out.value())
        .map_err(GradCheckError::ForwardPassError)
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
