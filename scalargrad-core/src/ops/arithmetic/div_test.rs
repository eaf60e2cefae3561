use super::div_op;
use crate::error::ScalarGradError;
use crate::scalar::Scalar;
use approx::assert_relative_eq;

#[test]
fn test_div_forward_and_backward() {
    let a = Scalar::new(6.0);
    let b = Scalar::new(4.0);
    let q = div_op(&a, &b).unwrap();
    assert_eq!(q.value(), 1.5);
    assert_eq!(q.op_tag(), "/");

    q.backward().unwrap();
    assert_relative_eq!(a.grad(), 0.25);
    // -a / b^2 = -6 / 16
    assert_relative_eq!(b.grad(), -0.375);
}

#[test]
fn test_div_by_zero_is_error() {
    let a = Scalar::new(1.0);
    let zero = Scalar::new(0.0);
    assert_eq!(div_op(&a, &zero).unwrap_err(), ScalarGradError::DivisionByZero);

    let neg_zero = Scalar::new(-0.0);
    assert!(matches!(div_op(&a, &neg_zero), Err(ScalarGradError::DivisionByZero)));
}

#[test]
fn test_zero_numerator_is_fine() {
    let zero = Scalar::new(0.0);
    let b = Scalar::new(2.0);
    let q = div_op(&zero, &b).unwrap();
    assert_eq!(q.value(), 0.0);
    q.backward().unwrap();
    assert_eq!(zero.grad(), 0.5);
    assert_eq!(b.grad(), 0.0);
}

#[test]
#[should_panic(expected = "Division by zero")]
fn test_div_operator_panics_on_zero() {
    let a = Scalar::new(1.0);
    let _ = &a / 0.0;
}

#[test]
fn test_reflected_div_keeps_order() {
    let x = Scalar::new(4.0);
    let q = 2.0 / &x;
    assert_eq!(q.value(), 0.5, "2 / x, not x / 2");

    q.backward().unwrap();
    // d(2/x)/dx = -2 / x^2
    assert_relative_eq!(x.grad(), -0.125);
}

#[test]
fn test_div_raw_scalar_on_right() {
    let x = Scalar::new(3.0);
    let q = x.clone() / 2.0;
    assert_eq!(q.value(), 1.5);
    q.backward().unwrap();
    assert_eq!(x.grad(), 0.5);
}
