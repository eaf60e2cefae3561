use scalargrad_core::ops::arithmetic::div_op;
use scalargrad_core::utils::testing::{check_grads_near, check_value_near};
use scalargrad_core::{Scalar, ScalarGradError};

mod common;
use common::{leaf_vec, leaves, squared_error};

#[test]
fn test_forward_expression() {
    let [a, b, c] = leaves([2.0, -3.0, 10.0]);
    let d = &a * &b + &c;
    assert_eq!(d.value(), 4.0);
    assert_eq!(d.grad(), 0.0, "no backward yet");
}

#[test]
fn test_additive_and_multiplicative_gradients() {
    let [a, b] = leaves([2.0, 3.0]);
    let s = &a + &b;
    s.backward().unwrap();
    check_grads_near(&[a, b], &[1.0, 1.0], 0.0);

    let [a, b] = leaves([2.0, 3.0]);
    let p = &a * &b;
    p.backward().unwrap();
    check_grads_near(&[a, b], &[3.0, 2.0], 0.0);
}

#[test]
fn test_diamond_accumulates() {
    let a = Scalar::new(3.0);
    let b = &a + &a;
    b.backward().unwrap();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_relu_boundary() {
    let x = Scalar::new(-5.0);
    let y = x.relu();
    assert_eq!(y.value(), 0.0);
    y.backward().unwrap();
    assert_eq!(x.grad(), 0.0);

    let x = Scalar::new(5.0);
    let y = x.relu();
    assert_eq!(y.value(), 5.0);
    y.backward().unwrap();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_rerun_without_reset_doubles() {
    let [a, b] = leaves([2.0, 3.0]);
    let s = &a + &b;
    s.backward().unwrap();
    s.backward().unwrap();
    check_grads_near(&[a, b], &[2.0, 2.0], 0.0);
}

#[test]
fn test_reflected_operators() {
    let x = Scalar::new(4.0);
    check_value_near(&(1.0 - &x), -3.0, 0.0);
    check_value_near(&(1.0 / &x), 0.25, 0.0);
    check_value_near(&(1.0 + &x), 5.0, 0.0);
    check_value_near(&(3.0 * &x), 12.0, 0.0);
}

#[test]
fn test_division_by_zero_surfaces_synchronously() {
    let [a, z] = leaves([1.0, 0.0]);
    assert_eq!(div_op(&a, &z).unwrap_err(), ScalarGradError::DivisionByZero);
    // Nothing was recorded on the operands.
    assert_eq!(a.grad(), 0.0);
}

#[test]
fn test_squared_error_gradients() {
    let predictions = leaf_vec(&[1.0, 4.0]);
    let loss = squared_error(&predictions, &[3.0, 4.0]);
    assert_eq!(loss.value(), 4.0);

    loss.backward().unwrap();
    // d/dp (p - t)^2 = 2 (p - t)
    check_grads_near(&predictions, &[-4.0, 0.0], 1e-12);
}

#[test]
fn test_handles_share_node() {
    let a = Scalar::new(1.0);
    let alias = a.clone();
    let y = &alias * 5.0;
    y.backward().unwrap();
    assert_eq!(a.grad(), 5.0);
    assert_eq!(a, alias);
}
