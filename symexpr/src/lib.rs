//! Symexpr: deferred symbolic expressions rendered as source text.
//!
//! An [`Expression`](expr::Expression) is a placeholder. Instead of computing anything,
//! arithmetic, bitwise, comparison and unary operators, a few built-in calls, attribute
//! and item accesses are recorded, and the accumulated text is available through
//! [`render`](expr::Expression::render). The result is meant to be parsed or evaluated
//! elsewhere, e.g. as a constraint or a query predicate.
//!
//! Rendering shape
//!  - Left-binary: `<self>OP(<other>)`; reflected: `(<other>)OP<self>`; unary: `OP(<self>)`;
//!    calls: `FN(<self>, <args>, <name>=<value>)`; access: `(<self>).name`, `(<self>)[key]`.
//!  - Operands are always parenthesized, never minimally: the text stays unambiguous no
//!    matter how the recorded pieces nest.
//!  - Plain operands use canonical literal syntax (see [`literal::Literal`]); nested
//!    expressions are spliced verbatim.
//!
//! Example
//! ```
//! use symexpr::prelude::*;
//!
//! let x = Expression::new("x");
//! let constraint = (&x * 2).pow(x.abs()).less_equal(10);
//! assert_eq!(constraint.render(), "x*(2)**(abs(x))<=(10)");
//! assert_eq!(x.round_to(2).render(), "round(x, 2)");
//! assert_eq!(x.index((1, 2)).render(), "(x)[(1, 2)]");
//!
//! // Operations needing a concrete primitive cannot be recorded.
//! let err = x.apply_named("len", Operand::None).unwrap_err();
//! assert!(err.is_requires_primitive());
//! ```

/// Operation catalog: supported operations and their rendering templates.
pub mod catalog;
/// Error type shared by the fallible APIs.
pub mod error;
/// The expression placeholder and its operator wiring.
pub mod expr;
/// Literal rendering of plain values and built-in call arguments.
pub mod literal;

pub use error::Error;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::catalog::{BinaryOp, BuiltinFn, HostOp, OpKind, Operation, Template, UnaryOp};
    pub use crate::error::Error;
    pub use crate::expr::{Expression, Operand};
    pub use crate::literal::{Args, Literal};
}
