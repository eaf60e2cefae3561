// src/scalar/mod.rs

use crate::autograd::graph::NodeId;
use crate::autograd::ScalarOp;
use crate::scalar_data::ScalarData;
use log::trace;
use std::rc::Rc;

mod autograd_methods;
mod traits;

/// A node of the computation graph holding one `f64` value and its gradient.
///
/// `Scalar` is a handle: it wraps `Rc<ScalarData>`, so cloning is cheap and
/// every clone refers to the *same* node. This is what lets one operand be
/// shared by several consumers (`b = a + a`, diamonds) while the backward
/// pass still visits it exactly once.
///
/// Equality and hashing are by node identity, not by value: two leaves built
/// from the same literal are different nodes.
///
/// `Scalar` is neither `Send` nor `Sync`. A graph belongs to the thread that
/// built it.
pub struct Scalar {
    pub(crate) data: Rc<ScalarData>,
}

impl Scalar {
    /// Creates a leaf node from a literal value.
    pub fn new(value: f64) -> Self {
        Scalar {
            data: Rc::new(ScalarData::new(value)),
        }
    }

    /// Creates the result node of `op`. Used by the forward operations in
    /// [`crate::ops`].
    pub(crate) fn from_op(value: f64, op: ScalarOp) -> Self {
        trace!("new {} node with value {:?}", op.tag(), value);
        Scalar {
            data: Rc::new(ScalarData::with_op(value, op)),
        }
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.data.value
    }

    /// Returns the accumulated gradient.
    ///
    /// Only meaningful after a backward pass rooted at a node that depends on
    /// this one.
    pub fn grad(&self) -> f64 {
        self.data.grad.get()
    }

    /// Returns the operation that produced this node, or `None` for a leaf.
    pub fn op(&self) -> Option<&ScalarOp> {
        self.data.op.as_ref()
    }

    /// Diagnostic label of the producing operation (`""` for leaves).
    pub fn op_tag(&self) -> &'static str {
        self.op().map_or("", ScalarOp::tag)
    }

    /// Returns handles to the nodes this node was derived from.
    pub fn operands(&self) -> Vec<Scalar> {
        self.op()
            .map(|op| op.operands().into_iter().cloned().collect())
            .unwrap_or_default()
    }

    /// True if this node was created from a literal.
    pub fn is_leaf(&self) -> bool {
        self.data.op.is_none()
    }

    /// Identity of the underlying node, stable across clones of the handle.
    pub(crate) fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }
}
