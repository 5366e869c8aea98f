use crate::runtime::error::EvalError;
use std::fmt;

/// The `true` value. Only ever produced by copy, never rebuilt from parts.
pub const TRUE: Object = Object::Boolean(true);
/// The `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The "no meaningful value" result, e.g. an `if` with a false condition
/// and no `else` branch.
pub const NULL: Object = Object::Null;

#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Integer(i64),
    Boolean(bool),
    Null,
    /// Signals "unwind to the enclosing program boundary". Never part of a
    /// user-visible final result; unwrapped at the outermost evaluation.
    Return(Box<Object>),
    Error(EvalError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Integer,
    Boolean,
    Null,
    Return,
    Error,
}

impl ObjectKind {
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Integer => "INTEGER",
            ObjectKind::Boolean => "BOOLEAN",
            ObjectKind::Null => "NULL",
            ObjectKind::Return => "RETURN_VALUE",
            ObjectKind::Error => "ERROR",
        }
    }
}

impl Object {
    pub fn boolean(value: bool) -> Object {
        if value {
            TRUE
        } else {
            FALSE
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Integer(_) => ObjectKind::Integer,
            Object::Boolean(_) => ObjectKind::Boolean,
            Object::Null => ObjectKind::Null,
            Object::Return(_) => ObjectKind::Return,
            Object::Error(_) => ObjectKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    /// Truthiness for conditional branching: NULL and `false` are falsy,
    /// everything else (including integer zero) is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Null | Object::Boolean(false))
    }

    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Integer(value) => write!(f, "{value}"),
            Object::Boolean(value) => write!(f, "{value}"),
            Object::Null => write!(f, "null"),
            Object::Return(inner) => write!(f, "{inner}"),
            Object::Error(err) => write!(f, "ERROR: {err}"),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
