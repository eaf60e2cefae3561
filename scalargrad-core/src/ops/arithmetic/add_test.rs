use super::add_op;
use crate::scalar::Scalar;
use crate::utils::testing::check_grads_near;

#[test]
fn test_add_forward() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let s = add_op(&a, &b);
    assert_eq!(s.value(), 5.0);
    assert_eq!(s.op_tag(), "+");
    assert_eq!(s.operands(), vec![a, b]);
}

#[test]
fn test_add_backward_simple() {
    let a = Scalar::new(2.0);
    let b = Scalar::new(3.0);
    let s = &a + &b;

    s.backward().unwrap();
    assert_eq!(s.grad(), 1.0);
    check_grads_near(&[a, b], &[1.0, 1.0], 0.0);
}

#[test]
fn test_add_same_operand_accumulates() {
    let a = Scalar::new(3.0);
    let b = &a + &a;
    assert_eq!(b.value(), 6.0);

    b.backward().unwrap();
    assert_eq!(a.grad(), 2.0);
}

#[test]
fn test_add_raw_scalar_both_sides() {
    let x = Scalar::new(1.5);
    let right = &x + 2.0;
    let left = 2.0 + &x;
    assert_eq!(right.value(), 3.5);
    assert_eq!(left.value(), 3.5);

    // The literal is lifted to a leaf operand.
    let lifted = &left.operands()[0];
    assert!(lifted.is_leaf());
    assert_eq!(lifted.value(), 2.0);

    left.backward().unwrap();
    assert_eq!(x.grad(), 1.0);
    assert_eq!(lifted.grad(), 1.0);
}

#[test]
fn test_add_owned_operands() {
    let a = Scalar::new(1.0);
    let b = Scalar::new(-4.0);
    let s = a.clone() + b.clone();
    assert_eq!(s.value(), -3.0);
    s.backward().unwrap();
    check_grads_near(&[a, b], &[1.0, 1.0], 0.0);
}
