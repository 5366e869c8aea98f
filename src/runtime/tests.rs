use crate::language::parser::parse_program;
use crate::runtime::evaluator::eval;
use crate::runtime::object::{Object, ObjectKind, FALSE, NULL, TRUE};

fn run(input: &str) -> Object {
    let program = parse_program(input).expect("program should parse");
    eval(&program)
}

fn assert_integer(input: &str, expected: i64) {
    match run(input) {
        Object::Integer(value) => {
            assert_eq!(value, expected, "wrong value for `{input}`");
        }
        other => panic!("`{input}` should evaluate to an integer, got {other:?}"),
    }
}

fn assert_boolean(input: &str, expected: bool) {
    let result = run(input);
    assert_eq!(
        result,
        Object::boolean(expected),
        "wrong result for `{input}`"
    );
}

fn assert_error(input: &str, expected_message: &str) {
    match run(input) {
        Object::Error(err) => {
            assert_eq!(err.to_string(), expected_message, "wrong error for `{input}`");
        }
        other => panic!("`{input}` should evaluate to an error, got {other:?}"),
    }
}

#[test]
fn integer_expressions() {
    let tests = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
    ];
    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn integer_division_truncates_toward_zero() {
    let tests = [("7 / 2", 3), ("-7 / 2", -3), ("7 / -2", -3), ("0 / 5", 0)];
    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn boolean_expressions() {
    let tests = [
        ("true", true),
        ("false", false),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("true == true", true),
        ("false == false", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
    ];
    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn integer_comparisons() {
    let tests = [
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
    ];
    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn bang_operator() {
    let tests = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!0", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
    ];
    for (input, expected) in tests {
        assert_boolean(input, expected);
    }
}

#[test]
fn if_else_expressions() {
    let tests = [
        ("if (true) { 10 }", Some(10)),
        ("if (false) { 10 }", None),
        ("if (1) { 10 }", Some(10)),
        ("if (0) { 10 }", Some(10)),
        ("if (1 < 2) { 10 }", Some(10)),
        ("if (1 > 2) { 10 }", None),
        ("if (1 > 2) { 10 } else { 20 }", Some(20)),
        ("if (1 < 2) { 10 } else { 20 }", Some(10)),
    ];
    for (input, expected) in tests {
        match expected {
            Some(value) => assert_integer(input, value),
            None => assert_eq!(run(input), NULL, "`{input}` should evaluate to null"),
        }
    }
}

#[test]
fn return_statements() {
    let tests = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        (
            "if (10 > 1) {
                if (10 > 1) {
                    return 10;
                }
                return 1;
            }",
            10,
        ),
    ];
    for (input, expected) in tests {
        assert_integer(input, expected);
    }
}

#[test]
fn return_value_never_leaks() {
    // The outermost call unwraps the signal: no Return object is visible.
    let result = run("return 10;");
    assert_eq!(result.kind(), ObjectKind::Integer);
}

#[test]
fn error_handling() {
    let tests = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "unknown operator: -BOOLEAN"),
        ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
        ("true < false", "unknown operator: BOOLEAN < BOOLEAN"),
        ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) { true + false; }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        (
            "if (10 > 1) {
                if (10 > 1) {
                    return true + false;
                }
                return 1;
            }",
            "unknown operator: BOOLEAN + BOOLEAN",
        ),
        ("5 / 0", "division by zero"),
    ];
    for (input, expected) in tests {
        assert_error(input, expected);
    }
}

#[test]
fn errors_short_circuit_larger_expressions() {
    // No partial result leaks out of a tree that fails somewhere inside.
    assert_error("(5 + true) + 1", "type mismatch: INTEGER + BOOLEAN");
    assert_error("1 + (5 + true)", "type mismatch: INTEGER + BOOLEAN");
    assert_error("!(5 + true)", "type mismatch: INTEGER + BOOLEAN");
    assert_error(
        "if (5 + true) { 10 } else { 20 }",
        "type mismatch: INTEGER + BOOLEAN",
    );
}

#[test]
fn error_stops_statement_sequence() {
    // The left operand fails first, so its error wins over the right one.
    assert_error("true + 1; 5 / 0;", "type mismatch: BOOLEAN + INTEGER");
}

#[test]
fn boolean_results_are_the_shared_constants() {
    assert_eq!(run("true"), TRUE);
    assert_eq!(run("false"), FALSE);
    assert_eq!(run("1 < 2"), TRUE);
    assert_eq!(run("!true"), FALSE);
    assert_eq!(Object::boolean(true), TRUE);
    assert_eq!(Object::boolean(false), FALSE);
}

#[test]
fn evaluation_is_idempotent() {
    let program = parse_program("if (1 < 2) { 9; return 2 * 5; 9; } else { 20 }")
        .expect("program should parse");
    let first = eval(&program);
    let second = eval(&program);
    assert_eq!(first, Object::Integer(10));
    assert_eq!(first, second);
}

#[test]
fn object_kinds_and_names() {
    let cases = [
        (Object::Integer(1), ObjectKind::Integer, "INTEGER"),
        (TRUE, ObjectKind::Boolean, "BOOLEAN"),
        (NULL, ObjectKind::Null, "NULL"),
        (
            Object::Return(Box::new(Object::Integer(1))),
            ObjectKind::Return,
            "RETURN_VALUE",
        ),
    ];
    for (object, kind, name) in cases {
        assert_eq!(object.kind(), kind);
        assert_eq!(object.kind().name(), name);
    }
}

#[test]
fn inspect_rendering() {
    assert_eq!(Object::Integer(5).inspect(), "5");
    assert_eq!(Object::Integer(-42).inspect(), "-42");
    assert_eq!(TRUE.inspect(), "true");
    assert_eq!(FALSE.inspect(), "false");
    assert_eq!(NULL.inspect(), "null");
    assert_eq!(Object::Return(Box::new(Object::Integer(7))).inspect(), "7");
    assert_eq!(run("5 + true").inspect(), "ERROR: type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn truthiness() {
    assert!(Object::Integer(0).is_truthy());
    assert!(Object::Integer(-1).is_truthy());
    assert!(TRUE.is_truthy());
    assert!(!FALSE.is_truthy());
    assert!(!NULL.is_truthy());
}

#[test]
fn empty_program_and_empty_blocks() {
    assert_eq!(run(""), NULL);
    assert_eq!(run("if (true) { }"), NULL);
    assert_eq!(run("if (false) { 1 } else { }"), NULL);
}
