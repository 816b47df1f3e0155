//! Operator sugar for expressions.
//!
//! `define_ops_expr!` implements the binary operator traits on `Expression` and
//! `&Expression` for any `Into<Literal>` right operand, so `x + 2`, `&x * &y` and
//! `x << "k"` all record. `define_reflected_ops!` covers a plain value on the left
//! (`2 + x`), limited to `i64`, `f64` and `bool` so that `2` and `2.0` literals still
//! infer without annotations. `-x` records negation and `!x` records inversion (`~`).
use crate::catalog::{BinaryOp, UnaryOp};
use crate::expr::Expression;
use crate::literal::Literal;

macro_rules! define_ops_expr {
    ($($trait:ident :: $method:ident => $op:expr),* $(,)?) => {
        $(
            impl<_O1: Into<Literal>> std::ops::$trait<_O1> for Expression {
                type Output = Expression;

                #[inline]
                fn $method(self, rhs: _O1) -> Self::Output {
                    self.binary($op, rhs)
                }
            }

            impl<_O1: Into<Literal>> std::ops::$trait<_O1> for &Expression {
                type Output = Expression;

                #[inline]
                fn $method(self, rhs: _O1) -> Self::Output {
                    self.binary($op, rhs)
                }
            }
        )*
    };
}

define_ops_expr! {
    Add::add => BinaryOp::Add,
    Sub::sub => BinaryOp::Sub,
    Mul::mul => BinaryOp::Mul,
    Div::div => BinaryOp::TrueDiv,
    Rem::rem => BinaryOp::Mod,
    BitAnd::bitand => BinaryOp::BitAnd,
    BitOr::bitor => BinaryOp::BitOr,
    BitXor::bitxor => BinaryOp::BitXor,
    Shl::shl => BinaryOp::Shl,
    Shr::shr => BinaryOp::Shr,
}

macro_rules! define_reflected_ops {
    (@impl $lhs:ty, $trait:ident :: $method:ident => $op:expr) => {
        impl std::ops::$trait<Expression> for $lhs {
            type Output = Expression;

            #[inline]
            fn $method(self, rhs: Expression) -> Self::Output {
                rhs.reflect($op, self)
            }
        }

        impl std::ops::$trait<&Expression> for $lhs {
            type Output = Expression;

            #[inline]
            fn $method(self, rhs: &Expression) -> Self::Output {
                rhs.reflect($op, self)
            }
        }
    };
    ($($lhs:ty),* $(,)?) => {
        $(
            define_reflected_ops!(@impl $lhs, Add::add => BinaryOp::Add);
            define_reflected_ops!(@impl $lhs, Sub::sub => BinaryOp::Sub);
            define_reflected_ops!(@impl $lhs, Mul::mul => BinaryOp::Mul);
            define_reflected_ops!(@impl $lhs, Div::div => BinaryOp::TrueDiv);
            define_reflected_ops!(@impl $lhs, Rem::rem => BinaryOp::Mod);
            define_reflected_ops!(@impl $lhs, BitAnd::bitand => BinaryOp::BitAnd);
            define_reflected_ops!(@impl $lhs, BitOr::bitor => BinaryOp::BitOr);
            define_reflected_ops!(@impl $lhs, BitXor::bitxor => BinaryOp::BitXor);
            define_reflected_ops!(@impl $lhs, Shl::shl => BinaryOp::Shl);
            define_reflected_ops!(@impl $lhs, Shr::shr => BinaryOp::Shr);
        )*
    };
}

define_reflected_ops! { i64, f64, bool }

impl std::ops::Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        self.unary(UnaryOp::Neg)
    }
}

impl std::ops::Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        self.unary(UnaryOp::Neg)
    }
}

impl std::ops::Not for Expression {
    type Output = Expression;

    fn not(self) -> Self::Output {
        self.unary(UnaryOp::Invert)
    }
}

impl std::ops::Not for &Expression {
    type Output = Expression;

    fn not(self) -> Self::Output {
        self.unary(UnaryOp::Invert)
    }
}
