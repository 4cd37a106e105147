use takeoffkit_core::EvaluationError;
use takeoffkit_designer::eval::{eval_and_truncate_3, evaluate, format_result};

#[test]
fn test_arithmetic_precedence() {
    assert_eq!(evaluate("1+2*3").unwrap(), 7.0);
    assert_eq!(evaluate("(1+2)*3").unwrap(), 9.0);
    assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
    assert_eq!(evaluate("12 / 4 / 3").unwrap(), 1.0);
}

#[test]
fn test_sqrt_and_power() {
    assert_eq!(evaluate("sqrt(3*3+4*4)").unwrap(), 5.0);
    assert_eq!(evaluate("2^3").unwrap(), 8.0);
    assert_eq!(evaluate("2**3").unwrap(), 8.0);
    assert_eq!(evaluate("sqrt(16)^0.5").unwrap(), 2.0);
}

#[test]
fn test_unary_signs() {
    assert_eq!(evaluate("-3+5").unwrap(), 2.0);
    assert_eq!(evaluate("+3").unwrap(), 3.0);
    assert_eq!(evaluate("--2").unwrap(), 2.0);
    assert_eq!(evaluate("4*-2").unwrap(), -8.0);
}

#[test]
fn test_variables_rejected() {
    assert!(matches!(
        evaluate("x+1"),
        Err(EvaluationError::Variable { ref name }) if name == "x"
    ));
}

#[test]
fn test_wrong_argument_count() {
    assert!(matches!(
        evaluate("sqrt(1,2)"),
        Err(EvaluationError::ArgumentCount {
            expected: 1,
            found: 2,
            ..
        })
    ));
    assert!(matches!(
        evaluate("sqrt()"),
        Err(EvaluationError::ArgumentCount { found: 0, .. })
    ));
}

#[test]
fn test_other_functions_rejected() {
    assert!(matches!(
        evaluate("abs(-1)"),
        Err(EvaluationError::DisallowedFunction { ref name }) if name == "abs"
    ));
    assert!(matches!(
        evaluate("__import__(1)"),
        Err(EvaluationError::DisallowedFunction { .. })
    ));
}

#[test]
fn test_disallowed_syntax() {
    assert!(matches!(
        evaluate("7 // 2"),
        Err(EvaluationError::DisallowedOperator { .. })
    ));
    assert!(matches!(
        evaluate("7 % 2"),
        Err(EvaluationError::DisallowedOperator { .. })
    ));
    assert!(matches!(
        evaluate("'12'"),
        Err(EvaluationError::NonNumericLiteral)
    ));
    assert!(matches!(
        evaluate("1; 2"),
        Err(EvaluationError::UnexpectedCharacter { ch: ';' })
    ));
    assert!(matches!(evaluate("   "), Err(EvaluationError::Empty)));
    assert!(matches!(evaluate("(1+2"), Err(EvaluationError::Syntax { .. })));
    assert!(matches!(evaluate("1 2"), Err(EvaluationError::Syntax { .. })));
}

#[test]
fn test_domain_errors() {
    assert!(matches!(
        evaluate("sqrt(-4)"),
        Err(EvaluationError::Domain { .. })
    ));
    assert!(matches!(
        evaluate("(-8)^0.5"),
        Err(EvaluationError::Domain { .. })
    ));
    assert_eq!(evaluate("(-2)^3").unwrap(), -8.0);
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(evaluate("1/0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("-1/0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn test_truncated_results() {
    assert_eq!(eval_and_truncate_3("10/3").unwrap(), 3.333);
    assert_eq!(eval_and_truncate_3("2/3").unwrap(), 0.666);
    assert_eq!(eval_and_truncate_3("-10/3").unwrap(), -3.334);
    assert_eq!(eval_and_truncate_3("4.2325").unwrap(), 4.232);
}

#[test]
fn test_format_result() {
    assert_eq!(format_result(8.0), "8");
    assert_eq!(format_result(4.232), "4.232");
    assert_eq!(format_result(-0.0), "0");
    assert_eq!(format_result(-1.5), "-1.5");
}

#[test]
fn test_leading_zero_literals_are_syntax_errors() {
    assert!(matches!(
        evaluate("2024-05-01"),
        Err(EvaluationError::Syntax { .. })
    ));
    assert!(matches!(evaluate("007"), Err(EvaluationError::Syntax { .. })));
    assert_eq!(evaluate("0.5+0").unwrap(), 0.5);
}
