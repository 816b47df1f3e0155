//! Literal rendering of plain operand values.
//!
//! Role
//! - [`Literal`] is the closed set of value kinds that may appear next to an expression:
//!   none, booleans, integers, floats, strings, tuples, lists, maps and nested expressions.
//! - Its `Display` implementation produces canonical literal syntax (quoted strings,
//!   `True`/`False`, `(1,)` for singleton tuples, ...), because downstream consumers parse
//!   or evaluate the rendered text.
//! - [`Args`] carries the positional and keyword arguments of a built-in call.
//!
//! Anything that does not convert into a [`Literal`] cannot be used as an operand; this
//! is checked at compile time through the `Into<Literal>` bounds of the builders.
use std::fmt::{self, Write};

use smallvec::SmallVec;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::expr::Expression;

/// Plain value (or nested expression) rendered as a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),
    Tuple(Vec<Literal>),
    List(Vec<Literal>),
    /// Key/value pairs, rendered in insertion order.
    Map(Vec<(Literal, Literal)>),
    /// Spliced verbatim, without extra parentheses.
    Expr(Expression),
}

impl Literal {
    /// Build a tuple literal from any sequence of values.
    pub fn tuple<T: Into<Literal>>(items: impl IntoIterator<Item = T>) -> Self {
        Literal::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Build a list literal from any sequence of values.
    pub fn list<T: Into<Literal>>(items: impl IntoIterator<Item = T>) -> Self {
        Literal::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map literal; pairs keep the order in which they are given.
    pub fn map<K: Into<Literal>, V: Into<Literal>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        Literal::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the embedded expression, if any.
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Literal::Expr(e) => Some(e),
            _ => None,
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }

    // `{:e}` yields the shortest round-trip digits together with the decimal exponent.
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') {
            f.write_str(&positional)
        } else {
            write!(f, "{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Printable means any general category outside `Other` and `Separator`, plus the ASCII space.
fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code <= 0xff {
                    write!(f, "\\x{code:02x}")?;
                } else if code <= 0xffff {
                    write!(f, "\\u{code:04x}")?;
                } else {
                    write!(f, "\\U{code:08x}")?;
                }
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

fn write_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Literal>,
) -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::None => f.write_str("None"),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::Int(value) => write!(f, "{value}"),
            Literal::Float(value) => write_float(f, *value),
            Literal::Str(text) => write_quoted(f, text),
            Literal::Tuple(items) => {
                f.write_char('(')?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            Literal::List(items) => {
                f.write_char('[')?;
                write_joined(f, items)?;
                f.write_char(']')
            }
            Literal::Map(pairs) => {
                f.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
            Literal::Expr(e) => f.write_str(e.render()),
        }
    }
}

// ========================= Conversions =========================
macro_rules! literal_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Int(value as i128)
                }
            }
        )*
    };
}

literal_from_int! { i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize }

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

/// `f32` values render through their widened `f64` value, so `0.1f32` renders as
/// `0.10000000149011612`.
impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Literal::Float(f64::from(value))
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<char> for Literal {
    fn from(value: char) -> Self {
        Literal::Str(value.to_string())
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::Str(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::Str(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Literal::Str(value.clone())
    }
}

impl From<Expression> for Literal {
    fn from(value: Expression) -> Self {
        Literal::Expr(value)
    }
}

impl From<&Expression> for Literal {
    fn from(value: &Expression) -> Self {
        Literal::Expr(value.clone())
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Literal::None, Into::into)
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(value: Vec<T>) -> Self {
        Literal::list(value)
    }
}

impl<T: Into<Literal> + Clone> From<&[T]> for Literal {
    fn from(value: &[T]) -> Self {
        Literal::list(value.iter().cloned())
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Literal::Tuple(Vec::new())
    }
}

macro_rules! literal_from_tuple {
    ($($name:ident: $var:ident),+) => {
        impl<$($name: Into<Literal>),+> From<($($name,)+)> for Literal {
            fn from(($($var,)+): ($($name,)+)) -> Self {
                Literal::Tuple(vec![$($var.into()),+])
            }
        }
    };
}

literal_from_tuple! { A: a }
literal_from_tuple! { A: a, B: b }
literal_from_tuple! { A: a, B: b, C: c }
literal_from_tuple! { A: a, B: b, C: c, D: d }
literal_from_tuple! { A: a, B: b, C: c, D: d, E: e }
literal_from_tuple! { A: a, B: b, C: c, D: d, E: e, F: f }

/// Arguments of a built-in call, beyond the expression itself.
///
/// ```
/// use symexpr::literal::Args;
///
/// let args = Args::new().arg(2).kwarg("mode", "fast");
/// assert_eq!(args.suffix(), ", 2, mode='fast'");
/// assert_eq!(Args::new().suffix(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: SmallVec<Literal, 2>,
    keyword: SmallVec<(String, Literal), 2>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Literal>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword argument. Re-using a name replaces the previous value in place.
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Literal>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.keyword.iter().position(|(n, _)| *n == name) {
            Some(i) => self.keyword[i].1 = value,
            None => self.keyword.push((name, value)),
        }
        self
    }

    pub fn positional(&self) -> &[Literal] {
        &self.positional
    }

    pub fn keyword(&self) -> impl Iterator<Item = (&str, &Literal)> {
        self.keyword.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Comma-prefixed rendering of all arguments, empty when there are none.
    pub fn suffix(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.positional.iter() {
            write!(f, ", {value}")?;
        }
        for (name, value) in self.keyword.iter() {
            write!(f, ", {name}={value}")?;
        }
        Ok(())
    }
}
