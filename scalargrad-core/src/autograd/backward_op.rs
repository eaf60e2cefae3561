use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use num_traits::Zero;

/// The operation that produced a non-leaf node, together with its operands.
///
/// Replaces a per-node backward closure: the engine dispatches on the variant
/// to apply the matching partial-derivative rule. Operands are shared handles
/// so a node consumed several times is still a single graph node.
#[derive(Debug, Clone)]
pub enum ScalarOp {
    Add(Scalar, Scalar),
    Sub(Scalar, Scalar),
    Mul(Scalar, Scalar),
    Div(Scalar, Scalar),
    Relu(Scalar),
}

impl ScalarOp {
    /// Diagnostic label of the operation.
    pub fn tag(&self) -> &'static str {
        match self {
            ScalarOp::Add(..) => "+",
            ScalarOp::Sub(..) => "-",
            ScalarOp::Mul(..) => "*",
            ScalarOp::Div(..) => "/",
            ScalarOp::Relu(..) => "ReLU",
        }
    }

    /// Operands in forward-argument order.
    pub fn operands(&self) -> Vec<&Scalar> {
        match self {
            ScalarOp::Add(a, b) | ScalarOp::Sub(a, b) | ScalarOp::Mul(a, b) | ScalarOp::Div(a, b) => {
                vec![a, b]
            }
            ScalarOp::Relu(input) => vec![input],
        }
    }

    /// Consumes the operation, returning its operand handles.
    pub(crate) fn into_operands(self) -> Vec<Scalar> {
        match self {
            ScalarOp::Add(a, b) | ScalarOp::Sub(a, b) | ScalarOp::Mul(a, b) | ScalarOp::Div(a, b) => {
                vec![a, b]
            }
            ScalarOp::Relu(input) => vec![input],
        }
    }

    /// Local-gradient rule.
    ///
    /// Given the current gradient `grad_output` of the node produced by this
    /// operation (and that node's value), adds each operand's partial
    /// contribution into the operand's gradient. Contributions always
    /// accumulate: with `a + a` both terms land on the same node.
    pub(crate) fn backward(&self, grad_output: f64, output_value: f64) -> Result<(), ScalarGradError> {
        match self {
            ScalarOp::Add(a, b) => {
                a.acc_grad(grad_output);
                b.acc_grad(grad_output);
            }
            ScalarOp::Sub(a, b) => {
                a.acc_grad(grad_output);
                b.acc_grad(-grad_output);
            }
            ScalarOp::Mul(a, b) => {
                a.acc_grad(grad_output * b.value());
                b.acc_grad(grad_output * a.value());
            }
            ScalarOp::Div(a, b) => {
                // grad(a) = g / b, grad(b) = g * (-a / b^2)
                let (a_value, b_value) = (a.value(), b.value());
                if b_value.is_zero() {
                    return Err(ScalarGradError::DivisionByZero);
                }
                a.acc_grad(grad_output / b_value);
                b.acc_grad(grad_output * (-a_value / (b_value * b_value)));
            }
            ScalarOp::Relu(input) => {
                // Sub-gradient at exactly 0 is 0.
                if output_value > 0.0 {
                    input.acc_grad(grad_output);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
