//! Restricted arithmetic evaluator.
//!
//! Accepts numeric literals, parentheses, `+ - * /`, exponentiation (`^` or
//! `**`), unary signs and `sqrt(x)`. Anything else is rejected with an
//! [`EvaluationError`]. Typographic `×`, `÷` and `−` are read as their ASCII
//! operators so that formula lines produced by the report can be re-typed.
//!
//! Precedence follows the usual convention, with exponentiation binding
//! tighter than unary minus and associating to the right:
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('+' | '-') unary | power
//! power := atom ('^' unary)?
//! atom  := number | '(' expr ')' | 'sqrt' '(' expr ')'
//! ```
//!
//! Division by zero is not an error: it yields IEEE infinity or NaN.

use takeoffkit_core::{truncate_3, EvaluationError};

type EvalResult<T> = Result<T, EvaluationError>;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    LParen,
    RParen,
    Comma,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Parsed arithmetic tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Neg(Box<Expr>),
    Binary(BinaryOp, Box<Expr>, Box<Expr>),
    Sqrt(Box<Expr>),
}

impl Expr {
    pub fn eval(&self) -> EvalResult<f64> {
        match self {
            Expr::Number(v) => Ok(*v),
            Expr::Neg(inner) => Ok(-inner.eval()?),
            Expr::Sqrt(inner) => {
                let v = inner.eval()?;
                if v < 0.0 {
                    return Err(EvaluationError::Domain {
                        message: format!("sqrt of negative number {}", v),
                    });
                }
                Ok(v.sqrt())
            }
            Expr::Binary(op, lhs, rhs) => {
                let a = lhs.eval()?;
                let b = rhs.eval()?;
                match op {
                    BinaryOp::Add => Ok(a + b),
                    BinaryOp::Sub => Ok(a - b),
                    BinaryOp::Mul => Ok(a * b),
                    BinaryOp::Div => Ok(a / b),
                    BinaryOp::Pow => {
                        if a < 0.0 && b.is_finite() && b.fract() != 0.0 {
                            return Err(EvaluationError::Domain {
                                message: format!("{} raised to fractional power {}", a, b),
                            });
                        }
                        Ok(a.powf(b))
                    }
                }
            }
        }
    }
}

fn tokenize(src: &str) -> EvalResult<Vec<Token>> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            c if c.is_whitespace() => i += 1,
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // Exponent only when digits follow, so "2e" stays a number and a name
                if i < chars.len() && matches!(chars[i], 'e' | 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && matches!(chars[j], '+' | '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        while j < chars.len() && chars[j].is_ascii_digit() {
                            j += 1;
                        }
                        i = j;
                    }
                }
                let literal: String = chars[start..i].iter().collect();
                let int_part = literal.split(['.', 'e', 'E']).next().unwrap_or_default();
                if int_part.len() > 1 && int_part.starts_with('0') {
                    return Err(EvaluationError::Syntax {
                        message: format!("leading zeros in number '{}'", literal),
                    });
                }
                let value = literal.parse::<f64>().map_err(|_| EvaluationError::Syntax {
                    message: format!("invalid number '{}'", literal),
                })?;
                tokens.push(Token::Num(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' | '−' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' if chars.get(i + 1) == Some(&'*') => {
                tokens.push(Token::Pow);
                i += 2;
            }
            '*' | '×' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                return Err(EvaluationError::DisallowedOperator {
                    op: "//".to_string(),
                });
            }
            '/' | '÷' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Pow);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            '"' | '\'' => return Err(EvaluationError::NonNumericLiteral),
            '%' | '<' | '>' | '=' | '!' | '&' | '|' | '~' | '@' => {
                return Err(EvaluationError::DisallowedOperator { op: ch.to_string() });
            }
            other => return Err(EvaluationError::UnexpectedCharacter { ch: other }),
        }
    }

    Ok(tokens)
}

fn syntax(message: &str) -> EvaluationError {
    EvaluationError::Syntax {
        message: message.to_string(),
    }
}

fn parse_add_sub(tokens: &[Token]) -> EvalResult<(Expr, &[Token])> {
    let (mut left, mut rest) = parse_mul_div(tokens)?;
    loop {
        let op = match rest.first() {
            Some(Token::Plus) => BinaryOp::Add,
            Some(Token::Minus) => BinaryOp::Sub,
            _ => break,
        };
        let (right, r) = parse_mul_div(&rest[1..])?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
        rest = r;
    }
    Ok((left, rest))
}

fn parse_mul_div(tokens: &[Token]) -> EvalResult<(Expr, &[Token])> {
    let (mut left, mut rest) = parse_unary(tokens)?;
    loop {
        let op = match rest.first() {
            Some(Token::Star) => BinaryOp::Mul,
            Some(Token::Slash) => BinaryOp::Div,
            _ => break,
        };
        let (right, r) = parse_unary(&rest[1..])?;
        left = Expr::Binary(op, Box::new(left), Box::new(right));
        rest = r;
    }
    Ok((left, rest))
}

fn parse_unary(tokens: &[Token]) -> EvalResult<(Expr, &[Token])> {
    match tokens.first() {
        Some(Token::Plus) => parse_unary(&tokens[1..]),
        Some(Token::Minus) => {
            let (operand, rest) = parse_unary(&tokens[1..])?;
            Ok((Expr::Neg(Box::new(operand)), rest))
        }
        _ => parse_power(tokens),
    }
}

fn parse_power(tokens: &[Token]) -> EvalResult<(Expr, &[Token])> {
    let (base, rest) = parse_atom(tokens)?;
    match rest.first() {
        Some(Token::Pow) => {
            let (exponent, rest) = parse_unary(&rest[1..])?;
            Ok((
                Expr::Binary(BinaryOp::Pow, Box::new(base), Box::new(exponent)),
                rest,
            ))
        }
        _ => Ok((base, rest)),
    }
}

fn parse_atom(tokens: &[Token]) -> EvalResult<(Expr, &[Token])> {
    match tokens.first() {
        Some(Token::Num(v)) => Ok((Expr::Number(*v), &tokens[1..])),
        Some(Token::LParen) => {
            let (expr, rest) = parse_add_sub(&tokens[1..])?;
            match rest.first() {
                Some(Token::RParen) => Ok((expr, &rest[1..])),
                _ => Err(syntax("missing closing parenthesis")),
            }
        }
        Some(Token::Ident(name)) => match tokens.get(1) {
            Some(Token::LParen) => parse_call(name, &tokens[2..]),
            _ => Err(EvaluationError::Variable { name: name.clone() }),
        },
        Some(_) => Err(syntax("unexpected token")),
        None => Err(syntax("unexpected end of expression")),
    }
}

/// Parses the argument list after `name(` and validates the call.
fn parse_call<'a>(name: &str, tokens: &'a [Token]) -> EvalResult<(Expr, &'a [Token])> {
    let mut args = Vec::new();
    let mut rest = tokens;

    if let Some(Token::RParen) = rest.first() {
        rest = &rest[1..];
    } else {
        loop {
            let (arg, r) = parse_add_sub(rest)?;
            args.push(arg);
            match r.first() {
                Some(Token::Comma) => rest = &r[1..],
                Some(Token::RParen) => {
                    rest = &r[1..];
                    break;
                }
                _ => return Err(syntax("missing closing parenthesis")),
            }
        }
    }

    if name != "sqrt" {
        return Err(EvaluationError::DisallowedFunction {
            name: name.to_string(),
        });
    }
    if args.len() != 1 {
        return Err(EvaluationError::ArgumentCount {
            name: name.to_string(),
            expected: 1,
            found: args.len(),
        });
    }

    let arg = args.remove(0);
    Ok((Expr::Sqrt(Box::new(arg)), rest))
}

/// Parses an expression without evaluating it.
pub fn parse(expr: &str) -> EvalResult<Expr> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(EvaluationError::Empty);
    }

    let (tree, rest) = parse_add_sub(&tokens)?;
    if !rest.is_empty() {
        return Err(syntax("unexpected trailing input"));
    }
    Ok(tree)
}

/// Parses and evaluates an expression.
pub fn evaluate(expr: &str) -> EvalResult<f64> {
    parse(expr)?.eval()
}

/// Evaluates and truncates the result at the third decimal.
pub fn eval_and_truncate_3(expr: &str) -> EvalResult<f64> {
    evaluate(expr).map(truncate_3)
}

/// Text form of a formula result, as written back into text annotations.
pub fn format_result(x: f64) -> String {
    if x == 0.0 {
        // Also folds -0 into 0
        return "0".to_string();
    }
    x.to_string()
}
