use std::fmt;

/// The value of a literal expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A boolean, written `true` or `false`.
    Boolean(bool),

    /// A 64-bit signed integer.
    Integer(i64),
}

impl Value {
    /// Returns the name of this value's type, for use in error messages.
    pub fn typename(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
        }
    }
}
