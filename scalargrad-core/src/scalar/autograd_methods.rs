use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use log::{debug, trace};

impl Scalar {
    /// Performs the backward pass starting from this node.
    ///
    /// Orders every node reachable through the operand relation
    /// topologically, seeds this node's gradient with `1.0` and then applies
    /// each node's local-gradient rule from this node back to the leaves.
    /// Every operand's rule runs only after all of its consumers' rules.
    ///
    /// Gradients are **accumulated, never reset**. Calling `backward` twice on
    /// the same graph without [`zero_grad_graph`](Self::zero_grad_graph) in
    /// between adds the second pass on top of the first: the terminal is
    /// re-seeded to `1.0`, but every other node keeps its stale gradient and
    /// propagates it again.
    ///
    /// Calling `backward` on a leaf only sets its own gradient to `1.0`.
    ///
    /// # Errors
    /// Returns [`ScalarGradError::DivisionByZero`] if a `Div` node in the
    /// graph has a zero divisor. Contributions made before the failing node
    /// are not rolled back.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.backward_with(|_| {})
    }

    /// `backward` with a callback invoked on each node right before its
    /// local-gradient rule is applied.
    pub(crate) fn backward_with<F>(&self, mut on_node: F) -> Result<(), ScalarGradError>
    where
        F: FnMut(&Scalar),
    {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} node(s) reachable from terminal {:?}",
            sorted_nodes.len(),
            self
        );

        // d(terminal)/d(terminal) = 1
        self.data.grad.set(1.0);

        for node in sorted_nodes.iter().rev() {
            on_node(node);
            if let Some(op) = node.op() {
                trace!("applying {} rule with upstream grad {:?}", op.tag(), node.grad());
                op.backward(node.grad(), node.value())?;
            }
        }

        debug!("backward: done");
        Ok(())
    }

    /// Nodes reachable from this one in topological order, this node last.
    pub fn topological_order(&self) -> Vec<Scalar> {
        topological_sort(self)
    }

    /// Adds `delta` to this node's gradient.
    pub(crate) fn acc_grad(&self, delta: f64) {
        let grad = &self.data.grad;
        grad.set(grad.get() + delta);
    }

    /// Resets this node's gradient to zero.
    pub fn zero_grad(&self) {
        self.data.grad.set(0.0);
    }

    /// Resets the gradient of this node and of every node it depends on.
    pub fn zero_grad_graph(&self) {
        for node in topological_sort(self) {
            node.zero_grad();
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
