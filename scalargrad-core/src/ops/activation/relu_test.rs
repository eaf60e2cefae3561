use super::relu_op;
use crate::scalar::Scalar;

#[test]
fn test_relu_negative_input() {
    let x = Scalar::new(-5.0);
    let y = x.relu();
    assert_eq!(y.value(), 0.0);
    assert_eq!(y.op_tag(), "ReLU");
    assert_eq!(y.operands(), vec![x.clone()]);

    y.backward().unwrap();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_relu_positive_input() {
    let x = Scalar::new(5.0);
    let y = relu_op(&x);
    assert_eq!(y.value(), 5.0);

    y.backward().unwrap();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_relu_subgradient_at_zero_is_zero() {
    let x = Scalar::new(0.0);
    let y = x.relu();
    assert_eq!(y.value(), 0.0);

    y.backward().unwrap();
    assert_eq!(x.grad(), 0.0);
}

#[test]
fn test_relu_scales_upstream_grad() {
    let x = Scalar::new(2.0);
    let y = x.relu() * 3.0;
    y.backward().unwrap();
    assert_eq!(x.grad(), 3.0);
}
