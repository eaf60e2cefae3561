//! Forward operations. Each one computes the result value and records a
//! [`ScalarOp`](crate::autograd::ScalarOp) on the new node.

pub mod activation;
pub mod arithmetic;
