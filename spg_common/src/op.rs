//! Implementation-generating macros for single-field newtypes.

/// Forwards a `std::ops` trait implementation to the wrapped value of a newtype.
///
/// `op!(binary Foo, Add, add)` implements `Add for Foo`, `op!(inplace Foo, SubAssign, sub_assign)` implements the
/// in-place variant, and `op!(unary Foo, Neg, neg)` the unary one.
#[macro_export]
macro_rules! op {
    (binary $newtype:ident, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $newtype {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(std::ops::$trait::$method(self.0, rhs.0))
            }
        }
    };
    (inplace $newtype:ident, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $newtype {
            fn $method(&mut self, rhs: Self) {
                std::ops::$trait::$method(&mut self.0, rhs.0)
            }
        }
    };
    (unary $newtype:ident, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $newtype {
            type Output = Self;

            fn $method(self) -> Self::Output {
                Self(std::ops::$trait::$method(self.0))
            }
        }
    };
}
