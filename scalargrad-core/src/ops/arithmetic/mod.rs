// Implements `std::ops::$trait` for every ownership combination of
// `Scalar`/`&Scalar` plus raw `f64` on either side. Raw numbers are lifted to
// leaves first, and the reflected forms keep mathematical argument order
// (`2.0 - x` is `sub_op(&2.0.into(), x)`).
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl<'a, 'b> std::ops::$trait<&'b Scalar> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&self, &rhs)
            }
        }

        impl<'b> std::ops::$trait<&'b Scalar> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> std::ops::$trait<Scalar> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(self, &rhs)
            }
        }

        impl<'a> std::ops::$trait<f64> for &'a Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(self, &Scalar::from(rhs))
            }
        }

        impl std::ops::$trait<f64> for Scalar {
            type Output = Scalar;
            fn $method(self, rhs: f64) -> Scalar {
                $op_fn(&self, &Scalar::from(rhs))
            }
        }

        impl<'b> std::ops::$trait<&'b Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: &'b Scalar) -> Scalar {
                $op_fn(&Scalar::from(self), rhs)
            }
        }

        impl std::ops::$trait<Scalar> for f64 {
            type Output = Scalar;
            fn $method(self, rhs: Scalar) -> Scalar {
                $op_fn(&Scalar::from(self), &rhs)
            }
        }
    };
}

// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use sub::sub_op;
