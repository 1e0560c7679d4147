//! Compiles whitespace separated Reverse Polish Notation into an [`Expr`] tree.
//!
//! ```
//! use RustedIntegral::symbolic::rpn_engine::Expr;
//! let f = Expr::parse_rpn("x 2 ^ x sin +").unwrap();
//! println!("parsed expression {}", f);
//! assert_eq!(f.to_string(), "((x ^ 2) + sin(x))");
//! ```
//  token classes, checked in this order
//                |  token            | stack effect             |
//                |___________________|__________________________|
//                |  variable symbol  | push Var                 |
//                |  + - * / ^        | pop right, pop left, push|
//                |  sin cos tg ...   | pop operand, push        |
//                |  f64 literal      | push Const               |
//                |  anything else    | InvalidToken             |
use log::debug;

use crate::errors::CompileError;
use crate::symbolic::parse_stack::{DEFAULT_STACK_CAPACITY, ParseStack};
use crate::symbolic::rpn_engine::{Expr, MathFunction, OPERATORS, Operator};

/// Knobs of the compiler. The variable symbol is the only identifier that is not a
/// function name; the capacity bounds the number of pending operands.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserSettings {
    pub variable: char,
    pub stack_capacity: usize,
}

impl Default for ParserSettings {
    fn default() -> Self {
        ParserSettings {
            variable: 'x',
            stack_capacity: DEFAULT_STACK_CAPACITY,
        }
    }
}

fn is_variable(token: &str, variable: char) -> bool {
    let mut chars = token.chars();
    chars.next() == Some(variable) && chars.next().is_none()
}

fn as_operator(token: &str) -> Option<Operator> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if OPERATORS.contains(c) => Operator::from_symbol(c),
        _ => None,
    }
}

/// Compiles a token sequence with the default settings (`x`, capacity 50).
pub fn compile<S: AsRef<str>>(tokens: &[S]) -> Result<Expr, CompileError> {
    compile_with(tokens, &ParserSettings::default())
}

/// Builds the tree with the stack discipline of RPN. Purely structural: nothing is
/// evaluated here.
pub fn compile_with<S: AsRef<str>>(
    tokens: &[S],
    settings: &ParserSettings,
) -> Result<Expr, CompileError> {
    let mut stack = ParseStack::new(settings.stack_capacity);

    for (position, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let node = if is_variable(token, settings.variable) {
            Expr::Var(settings.variable)
        } else if let Some(op) = as_operator(token) {
            // the value popped first is the right operand
            let rhs = stack.pop(token, position)?;
            let lhs = stack.pop(token, position)?;
            Expr::op(op, lhs, rhs)
        } else if let Some(func) = MathFunction::from_name(token) {
            let arg = stack.pop(token, position)?;
            Expr::func(func, arg)
        } else {
            match token.parse::<f64>() {
                Ok(value) => Expr::Const(value),
                Err(_) => {
                    return Err(CompileError::InvalidToken {
                        token: token.to_string(),
                        position,
                    });
                }
            }
        };
        stack.push(node)?;
    }

    let expr = stack.finish()?;
    debug!(
        "compiled {} tokens into {} ({} nodes)",
        tokens.len(),
        expr,
        expr.node_count()
    );
    Ok(expr)
}

impl Expr {
    /// Splits `input` on whitespace and compiles the tokens with default settings.
    pub fn parse_rpn(input: &str) -> Result<Expr, CompileError> {
        Expr::parse_rpn_with(input, &ParserSettings::default())
    }

    pub fn parse_rpn_with(input: &str, settings: &ParserSettings) -> Result<Expr, CompileError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        compile_with(&tokens, settings)
    }
}
