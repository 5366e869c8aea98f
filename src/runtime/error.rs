use crate::language::ast::{BinaryOp, UnaryOp};
use crate::runtime::object::ObjectKind;
use thiserror::Error;

/// Evaluation failures. These travel as ordinary `Object::Error` values,
/// never as host panics: the evaluator stays total.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ObjectKind,
        operator: BinaryOp,
        right: ObjectKind,
    },
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: UnaryOp,
        operand: ObjectKind,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: ObjectKind,
        operator: BinaryOp,
        right: ObjectKind,
    },
    #[error("division by zero")]
    DivisionByZero,
}
