use crate::language::ast::{
    BinaryOp, Block, Expr, IfExpr, Literal, Program, Statement, UnaryOp,
};
use crate::runtime::{
    error::EvalError,
    object::{Object, NULL},
};

/// Evaluates a whole program and returns its result.
///
/// This is the only place a `Return` signal is unwrapped: a `return` anywhere
/// in the program unwinds through every enclosing block untouched and
/// surfaces here as the inner value. An `Error` is returned as-is; callers
/// inspect the result's kind before using it further.
pub fn eval(program: &Program) -> Object {
    let mut result = NULL;
    for statement in &program.statements {
        result = eval_statement(statement);
        match result {
            Object::Return(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }
    result
}

fn eval_statement(statement: &Statement) -> Object {
    match statement {
        Statement::Expr(stmt) => eval_expression(&stmt.expr),
        Statement::Return(stmt) => {
            let value = eval_expression(&stmt.value);
            if value.is_error() {
                return value;
            }
            Object::Return(Box::new(value))
        }
    }
}

// Return and Error pass through blocks unmodified; only the program
// boundary unwraps a Return. This is what lets a nested `return` skip the
// remaining statements of every enclosing block.
fn eval_block(block: &Block) -> Object {
    let mut result = NULL;
    for statement in &block.statements {
        result = eval_statement(statement);
        if matches!(result, Object::Return(_) | Object::Error(_)) {
            return result;
        }
    }
    result
}

fn eval_expression(expr: &Expr) -> Object {
    match expr {
        Expr::Literal(Literal::Int(value, _)) => Object::Integer(*value),
        Expr::Literal(Literal::Bool(value, _)) => Object::boolean(*value),
        Expr::Unary { op, expr, .. } => {
            let operand = eval_expression(expr);
            if operand.is_error() {
                return operand;
            }
            eval_unary(*op, operand)
        }
        Expr::Binary {
            op, left, right, ..
        } => {
            let lhs = eval_expression(left);
            if lhs.is_error() {
                return lhs;
            }
            let rhs = eval_expression(right);
            if rhs.is_error() {
                return rhs;
            }
            eval_binary(*op, lhs, rhs)
        }
        Expr::If(if_expr) => eval_if(if_expr),
    }
}

fn eval_unary(op: UnaryOp, operand: Object) -> Object {
    match op {
        UnaryOp::Not => Object::boolean(!operand.is_truthy()),
        UnaryOp::Neg => match operand {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            other => Object::Error(EvalError::UnknownPrefixOperator {
                operator: op,
                operand: other.kind(),
            }),
        },
    }
}

fn eval_binary(op: BinaryOp, lhs: Object, rhs: Object) -> Object {
    match (&lhs, &rhs) {
        (Object::Integer(left), Object::Integer(right)) => {
            eval_integer_binary(op, *left, *right)
        }
        (Object::Boolean(left), Object::Boolean(right)) => match op {
            BinaryOp::Eq => Object::boolean(left == right),
            BinaryOp::NotEq => Object::boolean(left != right),
            _ => Object::Error(EvalError::UnknownInfixOperator {
                left: lhs.kind(),
                operator: op,
                right: rhs.kind(),
            }),
        },
        _ if lhs.kind() != rhs.kind() => Object::Error(EvalError::TypeMismatch {
            left: lhs.kind(),
            operator: op,
            right: rhs.kind(),
        }),
        _ => Object::Error(EvalError::UnknownInfixOperator {
            left: lhs.kind(),
            operator: op,
            right: rhs.kind(),
        }),
    }
}

fn eval_integer_binary(op: BinaryOp, left: i64, right: i64) -> Object {
    match op {
        BinaryOp::Add => Object::Integer(left.wrapping_add(right)),
        BinaryOp::Sub => Object::Integer(left.wrapping_sub(right)),
        BinaryOp::Mul => Object::Integer(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Object::Error(EvalError::DivisionByZero)
            } else {
                // Truncates toward zero, like native signed division.
                Object::Integer(left.wrapping_div(right))
            }
        }
        BinaryOp::Lt => Object::boolean(left < right),
        BinaryOp::Gt => Object::boolean(left > right),
        BinaryOp::Eq => Object::boolean(left == right),
        BinaryOp::NotEq => Object::boolean(left != right),
    }
}

fn eval_if(if_expr: &IfExpr) -> Object {
    let condition = eval_expression(&if_expr.condition);
    if condition.is_error() {
        return condition;
    }
    if condition.is_truthy() {
        eval_block(&if_expr.then_branch)
    } else if let Some(else_block) = &if_expr.else_branch {
        eval_block(else_block)
    } else {
        NULL
    }
}
