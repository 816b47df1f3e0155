use strum::EnumIs;
use thiserror::Error;

use crate::catalog::{BinaryOp, HostOp};

#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum Error {
    /// The host operation needs a concrete primitive and cannot be recorded.
    #[error(
        "Host operation `{operation}` requires a primitive operand. It cannot be recorded on an expression."
    )]
    RequiresPrimitive { operation: HostOp },

    /// No catalog entry carries this name.
    #[error("No operation named `{name}` exists in the operation catalog.")]
    UnknownOperation { name: String },

    /// Comparisons have no reflected form.
    #[error(
        "Comparison `{operation}` cannot be recorded in reflected position. Only arithmetic and bitwise operators are reflectable."
    )]
    NotReflectable { operation: BinaryOp },

    /// The operand handed to a dynamically dispatched operation has the wrong shape.
    #[error("Operation `{operation}` expects {expected}, but {found} was provided.")]
    InvalidOperand {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}
