// src/scalar_data.rs
use crate::autograd::ScalarOp;
use std::cell::Cell;
use std::rc::Rc;

/// Internal storage for a single graph node.
///
/// Held behind an `Rc` by [`Scalar`](crate::Scalar) so that every consumer of
/// a node shares the same payload. The value is fixed at construction; only
/// the gradient is mutable, through a `Cell`.
#[derive(Debug)]
pub struct ScalarData {
    /// Forward-computed value.
    pub(crate) value: f64,
    /// Accumulated d(terminal)/d(this node). Starts at 0.
    pub(crate) grad: Cell<f64>,
    /// The operation that produced this node, holding its operands.
    /// Leaves (created from literals) have `op = None`.
    pub(crate) op: Option<ScalarOp>,
}

impl ScalarData {
    /// Payload for a leaf node.
    pub fn new(value: f64) -> Self {
        ScalarData {
            value,
            grad: Cell::new(0.0),
            op: None,
        }
    }

    /// Payload for a node produced by `op`.
    pub(crate) fn with_op(value: f64, op: ScalarOp) -> Self {
        ScalarData {
            value,
            grad: Cell::new(0.0),
            op: Some(op),
        }
    }
}

impl Drop for ScalarData {
    /// Releases the operand chain iteratively.
    ///
    /// The default drop would recurse once per graph level and overflow the
    /// stack on long expression chains. Operands whose last handle is held
    /// here are unwrapped and their own operands queued instead.
    fn drop(&mut self) {
        let mut pending = match self.op.take() {
            Some(op) => op.into_operands(),
            None => return,
        };
        while let Some(scalar) = pending.pop() {
            if let Ok(mut inner) = Rc::try_unwrap(scalar.data) {
                if let Some(op) = inner.op.take() {
                    pending.extend(op.into_operands());
                }
            }
        }
    }
}
