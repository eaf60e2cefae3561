// src/scalar/traits.rs

use crate::scalar::Scalar;
use num_traits::Zero;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Scalar {
    /// Shallow clone: the new handle points at the same graph node.
    fn clone(&self) -> Self {
        Scalar {
            data: Rc::clone(&self.data),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(data={:?}, grad={:?})", self.value(), self.grad())
    }
}

impl fmt::Debug for Scalar {
    /// Shows value, gradient and the producing op tag. Operands are not
    /// followed, so formatting a node never walks the graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scalar(data={:?}, grad={:?}, op={:?})",
            self.value(),
            self.grad(),
            self.op_tag()
        )
    }
}

impl PartialEq for Scalar {
    /// Identity comparison.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    /// Hashes the pointer address of the shared `ScalarData`.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

// --- Lifting raw numbers to leaves ---

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::new(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::new(f64::from(value))
    }
}

// --- Numeric traits ---

impl Zero for Scalar {
    /// A fresh leaf with value 0.
    fn zero() -> Self {
        Scalar::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value().is_zero()
    }
}

impl Sum for Scalar {
    /// Folds with `+` starting from a zero leaf, so every summand receives
    /// the full upstream gradient.
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.fold(Scalar::zero(), |acc, x| acc + x)
    }
}
