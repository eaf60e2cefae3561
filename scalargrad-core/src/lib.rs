//! Reverse-mode automatic differentiation over scalar values.
//!
//! Arithmetic on [`Scalar`] handles records a directed acyclic computation
//! graph as a side effect. Calling [`Scalar::backward`] on any node walks that
//! node's ancestry in reverse topological order and accumulates
//! d(terminal)/d(node) into every node reachable from it.
//!
//! ```
//! use scalargrad_core::Scalar;
//!
//! let a = Scalar::new(2.0);
//! let b = Scalar::new(-3.0);
//! let d = &a * &b + 10.0;
//! assert_eq!(d.value(), 4.0);
//!
//! d.backward().unwrap();
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! ```

pub mod autograd;
pub mod creation;
pub mod ops;
pub mod scalar;
pub mod scalar_data;
pub mod utils;

pub mod error;

// Re-exported so `scalargrad_core::Scalar` works directly
pub use error::ScalarGradError;
pub use scalar::Scalar;
// Re-export traits required by public impls (`Zero for Scalar`)
pub use num_traits;
