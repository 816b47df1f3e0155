//! Operation catalog: every operation an [`Expression`](crate::expr::Expression) can record.
//!
//! Role
//! - Enumerate the supported operations per kind (left-binary, reflected, unary, built-in
//!   call) and map each one to its rendering [`Template`].
//! - Provide stable names (`add`, `radd`, `neg`, `abs`, ...) so operations can be resolved
//!   from text by dynamic clients.
//!
//! The catalog is fixed: it lives in the `match` arms below and never changes at runtime.
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumIter, IntoEnumIterator};

use crate::error::Error;

/// Binary operators recorded with the expression as left operand.
///
/// Non-comparison operators can also be recorded in reflected position, see
/// [`BinaryOp::is_reflectable`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    TrueDiv,
    /// Legacy spelling of true division, rendered with the same `/` symbol.
    Div,
    FloorDiv,
    Mod,
    Pow,
    MatMul,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    /// Creates a [`BinaryOp`] from its left-binary name (e.g. `add`).
    pub fn from_str(s: &str) -> Option<Self> {
        BinaryOp::iter().find(|op| op.to_str() == s)
    }

    /// Returns the left-binary name of the [`BinaryOp`].
    pub fn to_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::TrueDiv => "truediv",
            BinaryOp::Div => "div",
            BinaryOp::FloorDiv => "floordiv",
            BinaryOp::Mod => "mod",
            BinaryOp::Pow => "pow",
            BinaryOp::MatMul => "matmul",
            BinaryOp::BitAnd => "and",
            BinaryOp::BitOr => "or",
            BinaryOp::BitXor => "xor",
            BinaryOp::Shl => "lshift",
            BinaryOp::Shr => "rshift",
            BinaryOp::Eq => "eq",
            BinaryOp::Ne => "ne",
            BinaryOp::Lt => "lt",
            BinaryOp::Le => "le",
            BinaryOp::Gt => "gt",
            BinaryOp::Ge => "ge",
        }
    }

    /// Name of the reflected entry (e.g. `radd`), `None` for comparisons.
    pub fn reflected_str(&self) -> Option<&'static str> {
        Some(match self {
            BinaryOp::Add => "radd",
            BinaryOp::Sub => "rsub",
            BinaryOp::Mul => "rmul",
            BinaryOp::TrueDiv => "rtruediv",
            BinaryOp::Div => "rdiv",
            BinaryOp::FloorDiv => "rfloordiv",
            BinaryOp::Mod => "rmod",
            BinaryOp::Pow => "rpow",
            BinaryOp::MatMul => "rmatmul",
            BinaryOp::BitAnd => "rand",
            BinaryOp::BitOr => "ror",
            BinaryOp::BitXor => "rxor",
            BinaryOp::Shl => "rlshift",
            BinaryOp::Shr => "rrshift",
            _ => return None,
        })
    }

    /// Source-level symbol spliced between the operands.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::TrueDiv | BinaryOp::Div => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "**",
            BinaryOp::MatMul => "@",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }

    /// Returns true for `==`, `!=`, `<`, `<=`, `>` and `>=`.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }

    /// Arithmetic and bitwise operators have a reflected form; comparisons do not.
    #[inline]
    pub fn is_reflectable(&self) -> bool {
        !self.is_comparison()
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    /// Bitwise inversion, `~`
    Invert,
    /// Negation, `-`
    Neg,
    /// Unary plus, `+`
    Pos,
}

impl UnaryOp {
    /// Creates an [`UnaryOp`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        UnaryOp::iter().find(|op| op.to_str() == s)
    }

    /// Returns the string representation of the [`UnaryOp`].
    pub fn to_str(&self) -> &'static str {
        match self {
            UnaryOp::Invert => "invert",
            UnaryOp::Neg => "neg",
            UnaryOp::Pos => "pos",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Invert => "~",
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
        }
    }
}

/// Built-in functions that can be applied to an expression.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BuiltinFn {
    Abs,
    Round,
    Reversed,
}

impl BuiltinFn {
    /// Creates a [`BuiltinFn`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        BuiltinFn::iter().find(|op| op.to_str() == s)
    }

    /// Returns the function name as it appears in rendered text.
    pub fn to_str(&self) -> &'static str {
        match self {
            BuiltinFn::Abs => "abs",
            BuiltinFn::Round => "round",
            BuiltinFn::Reversed => "reversed",
        }
    }
}

/// Host operations that need a concrete primitive value and therefore can never be
/// recorded on an expression (membership, length, iteration, type queries, truthiness).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HostOp {
    Len,
    Contains,
    Iter,
    IsInstance,
    IsSubclass,
    Bool,
}

impl HostOp {
    /// Creates a [`HostOp`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        HostOp::iter().find(|op| op.to_str() == s)
    }

    /// Returns the string representation of the [`HostOp`].
    pub fn to_str(&self) -> &'static str {
        match self {
            HostOp::Len => "len",
            HostOp::Contains => "contains",
            HostOp::Iter => "iter",
            HostOp::IsInstance => "isinstance",
            HostOp::IsSubclass => "issubclass",
            HostOp::Bool => "bool",
        }
    }
}

impl std::fmt::Display for HostOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Kind of a catalog entry.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpKind {
    LeftBinary,
    RightBinary,
    Unary,
    BuiltinCall,
}

/// Rendering rule of a catalog entry.
///
/// | Variant  | Output                      |
/// |----------|-----------------------------|
/// | `Left`   | `<self>OP(<other>)`         |
/// | `Right`  | `(<other>)OP<self>`         |
/// | `Prefix` | `OP(<self>)`                |
/// | `Call`   | `FN(<self><args><kwargs>)`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Left(&'static str),
    Right(&'static str),
    Prefix(&'static str),
    Call(&'static str),
}

impl Template {
    /// Splice the operand texts into the template.
    ///
    /// `operand` is the already formatted other operand for binaries, the argument suffix
    /// (see [`Args::suffix`](crate::literal::Args::suffix)) for calls, and ignored for
    /// prefix templates.
    pub fn render(&self, this: &str, operand: &str) -> String {
        match self {
            Template::Left(op) => format!("{this}{op}({operand})"),
            Template::Right(op) => format!("({operand}){op}{this}"),
            Template::Prefix(op) => format!("{op}({this})"),
            Template::Call(func) => format!("{func}({this}{operand})"),
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Left(BinaryOp),
    /// Reflected binary operation. Comparisons are not catalog entries here; build
    /// this variant through [`Operation::reflected`] to have them rejected.
    Right(BinaryOp),
    Unary(UnaryOp),
    Call(BuiltinFn),
}

impl Operation {
    /// Reflected entry for `op`, rejected for comparisons.
    pub fn reflected(op: BinaryOp) -> Result<Self, Error> {
        if op.is_reflectable() {
            Ok(Operation::Right(op))
        } else {
            Err(Error::NotReflectable { operation: op })
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Operation::Left(_) => OpKind::LeftBinary,
            Operation::Right(_) => OpKind::RightBinary,
            Operation::Unary(_) => OpKind::Unary,
            Operation::Call(_) => OpKind::BuiltinCall,
        }
    }

    /// Stable name of the entry, e.g. `add`, `radd`, `neg` or `round`.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Left(op) => op.to_str(),
            // Outside the catalog; these names never resolve through `from_name`.
            Operation::Right(op) => op.reflected_str().unwrap_or(match op {
                BinaryOp::Eq => "req",
                BinaryOp::Ne => "rne",
                BinaryOp::Lt => "rlt",
                BinaryOp::Le => "rle",
                BinaryOp::Gt => "rgt",
                _ => "rge",
            }),
            Operation::Unary(op) => op.to_str(),
            Operation::Call(func) => func.to_str(),
        }
    }

    pub fn template(&self) -> Template {
        match self {
            Operation::Left(op) => Template::Left(op.symbol()),
            Operation::Right(op) => Template::Right(op.symbol()),
            Operation::Unary(op) => Template::Prefix(op.symbol()),
            Operation::Call(func) => Template::Call(func.to_str()),
        }
    }

    /// Iterate over the whole catalog: left-binary, reflected, unary, then built-in calls.
    pub fn iter() -> impl Iterator<Item = Operation> {
        BinaryOp::iter()
            .map(Operation::Left)
            .chain(
                BinaryOp::iter()
                    .filter(BinaryOp::is_reflectable)
                    .map(Operation::Right),
            )
            .chain(UnaryOp::iter().map(Operation::Unary))
            .chain(BuiltinFn::iter().map(Operation::Call))
    }

    /// Resolve a catalog entry from its stable name.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        if let Some(op) = Operation::iter().find(|op| op.name() == name) {
            return Ok(op);
        }

        if let Some(operation) = HostOp::from_str(name) {
            debug!("Rejected `{name}`: host operation requires a primitive operand");
            return Err(Error::RequiresPrimitive { operation });
        }

        debug!("Rejected `{name}`: not in the operation catalog");
        Err(Error::UnknownOperation {
            name: name.to_owned(),
        })
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
