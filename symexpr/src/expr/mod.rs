//! Expressions: immutable placeholders recording the operations applied to them.
//!
//! Role
//! - [`Expression`] wraps a rendered text. Every operator, built-in call, attribute or item
//!   access produces a *new* expression whose text is the catalog template applied to the
//!   operands; nothing is ever evaluated.
//! - Operands are formatted through [`Literal`]: nested expressions are spliced verbatim,
//!   plain values use canonical literal syntax.
//!
//! Performance
//! - Each operation is a single string concatenation; the text is shared behind an `Arc` so
//!   cloning an expression is O(1).
//!
//! Example
//! ```
//! use symexpr::prelude::*;
//!
//! let var = Expression::new("self.var");
//! assert_eq!((&var + 2).render(), "self.var+(2)");
//! assert_eq!((2 + &var).render(), "(2)+self.var");
//! assert_eq!((!&var).render(), "~(self.var)");
//! assert_eq!(var.reversed().render(), "reversed(self.var)");
//! assert_eq!(var.field("attribute").index("key").render(), "((self.var).attribute)['key']");
//! ```
mod ops;

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{BinaryOp, BuiltinFn, OpKind, Operation, UnaryOp};
use crate::error::Error;
use crate::literal::{Args, Literal};

/// Deferred symbolic expression.
///
/// Equality semantics
/// - `==` on two [`Expression`]s compares their rendered texts and returns a `bool`. To
///   *record* an equality, use [`Expression::equals`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Expression {
    rendered: Arc<str>,
}

/// Operand handed to a dynamically dispatched operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Operand {
    /// Unary operations and argument-less built-in calls.
    #[default]
    None,
    /// Other operand of a binary operation.
    Value(Literal),
    /// Arguments of a built-in call.
    Args(Args),
}

impl Operand {
    pub fn value(value: impl Into<Literal>) -> Self {
        Operand::Value(value.into())
    }

    fn describe(&self) -> &'static str {
        match self {
            Operand::None => "no operand",
            Operand::Value(_) => "a value operand",
            Operand::Args(_) => "call arguments",
        }
    }
}

impl From<Literal> for Operand {
    fn from(value: Literal) -> Self {
        Operand::Value(value)
    }
}

impl From<Args> for Operand {
    fn from(args: Args) -> Self {
        Operand::Args(args)
    }
}

impl Expression {
    /// Wrap a raw label (variable name, source tag, literal) without validating it.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            rendered: Arc::from(text.into()),
        }
    }

    /// Text of everything recorded so far.
    #[inline]
    pub fn render(&self) -> &str {
        &self.rendered
    }

    pub fn into_string(self) -> String {
        self.rendered.to_string()
    }

    /// Hash of the rendered text; expressions with identical text collide.
    pub fn identity_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.rendered.hash(&mut hasher);
        hasher.finish()
    }

    #[inline]
    fn record(&self, operation: Operation, operand: &str) -> Expression {
        Expression::new(operation.template().render(&self.rendered, operand))
    }

    // ========================= Catalog builders =========================

    /// Record `self OP other`, rendered `<self>OP(<other>)`.
    pub fn binary(&self, op: BinaryOp, other: impl Into<Literal>) -> Expression {
        self.record(Operation::Left(op), &other.into().to_string())
    }

    /// Record `other OP self` with `other` on the left, rendered `(<other>)OP<self>`.
    ///
    /// Fails with [`Error::NotReflectable`] for comparisons.
    pub fn reflected(&self, op: BinaryOp, other: impl Into<Literal>) -> Result<Expression, Error> {
        let operation = Operation::reflected(op)?;
        Ok(self.record(operation, &other.into().to_string()))
    }

    /// Reflected recording for operators known to be reflectable.
    #[inline]
    pub(crate) fn reflect(&self, op: BinaryOp, other: impl Into<Literal>) -> Expression {
        debug_assert!(op.is_reflectable());
        self.record(Operation::Right(op), &other.into().to_string())
    }

    /// Record a prefix operator, rendered `OP(<self>)`.
    pub fn unary(&self, op: UnaryOp) -> Expression {
        self.record(Operation::Unary(op), "")
    }

    /// Record a built-in call, rendered `FN(<self>, <args>, <name>=<value>)`.
    pub fn call(&self, func: BuiltinFn, args: Args) -> Expression {
        self.record(Operation::Call(func), &args.suffix())
    }

    // ========================= Named operators =========================

    /// `self // other`
    pub fn floor_div(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::FloorDiv, other)
    }

    /// `self ** other`
    pub fn pow(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::Pow, other)
    }

    /// `self @ other`
    pub fn matmul(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::MatMul, other)
    }

    /// `other // self`
    pub fn rfloor_div(&self, other: impl Into<Literal>) -> Expression {
        self.reflect(BinaryOp::FloorDiv, other)
    }

    /// `other ** self`
    pub fn rpow(&self, other: impl Into<Literal>) -> Expression {
        self.reflect(BinaryOp::Pow, other)
    }

    /// `other @ self`
    pub fn rmatmul(&self, other: impl Into<Literal>) -> Expression {
        self.reflect(BinaryOp::MatMul, other)
    }

    pub fn equals(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::Eq, other)
    }

    pub fn not_equals(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::Ne, other)
    }

    pub fn less_than(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::Lt, other)
    }

    pub fn less_equal(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::Le, other)
    }

    pub fn greater_than(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::Gt, other)
    }

    pub fn greater_equal(&self, other: impl Into<Literal>) -> Expression {
        self.binary(BinaryOp::Ge, other)
    }

    /// Bitwise inversion `~self`, also available as `!expr`.
    pub fn invert(&self) -> Expression {
        self.unary(UnaryOp::Invert)
    }

    /// Unary plus `+self`.
    pub fn pos(&self) -> Expression {
        self.unary(UnaryOp::Pos)
    }

    // ========================= Built-in calls =========================

    pub fn abs(&self) -> Expression {
        self.call(BuiltinFn::Abs, Args::new())
    }

    /// `round(self)`
    pub fn round(&self) -> Expression {
        self.call(BuiltinFn::Round, Args::new())
    }

    /// `round(self, ndigits)`
    pub fn round_to(&self, ndigits: impl Into<Literal>) -> Expression {
        self.call(BuiltinFn::Round, Args::new().arg(ndigits))
    }

    pub fn reversed(&self) -> Expression {
        self.call(BuiltinFn::Reversed, Args::new())
    }

    // ========================= Access =========================

    /// Attribute access, rendered `(<self>).<name>`.
    ///
    /// Any name is recorded verbatim, including names of methods of this type: recording
    /// always goes through this method, so it never competes with them.
    pub fn field(&self, name: &str) -> Expression {
        Expression::new(format!("({}).{}", self.rendered, name))
    }

    /// Item access, rendered `(<self>)[<key>]` with the key as a literal.
    pub fn index(&self, key: impl Into<Literal>) -> Expression {
        Expression::new(format!("({})[{}]", self.rendered, key.into()))
    }

    // ========================= Dynamic dispatch =========================

    /// Record any catalog entry with an operand of the matching shape.
    ///
    /// Binary entries need [`Operand::Value`], unary entries [`Operand::None`], built-in calls
    /// either [`Operand::None`] or [`Operand::Args`].
    pub fn apply(&self, operation: Operation, operand: Operand) -> Result<Expression, Error> {
        trace!(
            "Recording `{operation}` on `{}` with {}",
            self.rendered,
            operand.describe()
        );

        match (operation, operand) {
            (Operation::Left(_), Operand::Value(value)) => {
                Ok(self.record(operation, &value.to_string()))
            }
            (Operation::Right(op), Operand::Value(value)) => self.reflected(op, value),
            (Operation::Unary(_), Operand::None) | (Operation::Call(_), Operand::None) => {
                Ok(self.record(operation, ""))
            }
            (Operation::Call(_), Operand::Args(args)) => Ok(self.record(operation, &args.suffix())),
            (operation, operand) => Err(Error::InvalidOperand {
                operation: operation.name(),
                expected: expected_operand(operation.kind()),
                found: operand.describe(),
            }),
        }
    }

    /// Same as [`Expression::apply`], resolving the operation by its catalog name.
    pub fn apply_named(&self, name: &str, operand: Operand) -> Result<Expression, Error> {
        let operation = Operation::from_name(name)?;
        self.apply(operation, operand)
    }
}

fn expected_operand(kind: OpKind) -> &'static str {
    match kind {
        OpKind::LeftBinary | OpKind::RightBinary => "a value operand",
        OpKind::Unary => "no operand",
        OpKind::BuiltinCall => "call arguments or no operand",
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for Expression {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        Expression::new(text)
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        Expression::new(text)
    }
}

impl From<Expression> for String {
    fn from(e: Expression) -> Self {
        e.into_string()
    }
}
