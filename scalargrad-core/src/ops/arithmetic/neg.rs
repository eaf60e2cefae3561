use crate::ops::arithmetic::mul::mul_op;
use crate::scalar::Scalar;
use std::ops::Neg;

/// `-a`, recorded as `a * -1` so the gradient flows back as `-g`.
pub fn neg_op(a: &Scalar) -> Scalar {
    mul_op(a, &Scalar::new(-1.0))
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(self)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        neg_op(&self)
    }
}
