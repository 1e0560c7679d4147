//! # RPN Engine Module
//!
//! The expression tree produced by the RPN compiler and consumed by the evaluator
//! and the integration engine.
//!
//! ## Purpose
//!
//! - represent a single-variable expression as an owned tree
//! - keep the arity of every node kind in the type itself: constants and the variable
//!   are leaves, a function owns exactly one operand, an operator owns exactly two
//! - render the tree back into infix (for logs and reports) and RPN (for the function log)
//!
//! ## Main Structures
//!
//! ### `Expr` Enum
//! - **Variable**: `Var(char)` - the free variable, `x` by default
//! - **Constant**: `Const(f64)` - numerical literal
//! - **Function**: `Func(MathFunction, Box<Expr>)` - unary function applied to one operand
//! - **Operator**: `Op(Operator, Box<Expr>, Box<Expr>)` - binary operation, left operand first
//!
//! ### `MathFunction` / `Operator`
//! Closed enums of the supported functions (`sin, cos, tg, ctg, ln, exp`) and operators
//! (`+ - * / ^`). Name lookup goes through the `strum`-derived `FromStr`, an immutable
//! table generated at compile time.
//!
//! Every node is exclusively owned by its parent. Dropping the root frees the whole tree
//! in one post-order sweep; there are no shared or back references.

use std::fmt;
use std::str::FromStr;

use log::debug;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Unary real functions accepted by the compiler.
///
/// Uses mathematical notation for the trigonometric functions: `tg` is the tangent,
/// `ctg` the cotangent `1/tan(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MathFunction {
    Sin,
    Cos,
    Tg,
    Ctg,
    Ln,
    Exp,
}

impl MathFunction {
    /// looks a function up by its exact (case sensitive) name
    pub fn from_name(name: &str) -> Option<MathFunction> {
        MathFunction::from_str(name).ok()
    }

    pub fn apply(&self, arg: f64) -> f64 {
        match self {
            MathFunction::Sin => arg.sin(),
            MathFunction::Cos => arg.cos(),
            MathFunction::Tg => arg.tan(),
            MathFunction::Ctg => 1.0 / arg.tan(),
            MathFunction::Ln => arg.ln(),
            MathFunction::Exp => arg.exp(),
        }
    }
}

/// Binary operators accepted by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Operator {
    #[strum(to_string = "+")]
    Add,
    #[strum(to_string = "-")]
    Sub,
    #[strum(to_string = "*")]
    Mul,
    #[strum(to_string = "/")]
    Div,
    #[strum(to_string = "^")]
    Pow,
}

/// characters recognised as one-character operator tokens
pub const OPERATORS: &str = "+-*/^";

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// IEEE-754 semantics: division by zero and domain errors of `powf` come back as
    /// infinities or NaN, they are not errors.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
            Operator::Pow => lhs.powf(rhs),
        }
    }
}

/// Expression tree compiled from RPN text.
///
/// # Examples
/// ```
/// use RustedIntegral::symbolic::rpn_engine::{Expr, Operator};
/// // x * x
/// let square = Expr::op(Operator::Mul, Expr::Var('x'), Expr::Var('x'));
/// assert_eq!(square.to_string(), "(x * x)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// the free variable
    Var(char),
    /// numerical literal
    Const(f64),
    /// unary function and its only operand
    Func(MathFunction, Box<Expr>),
    /// binary operator, left and right operand
    Op(Operator, Box<Expr>, Box<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Func(func, arg) => write!(f, "{}({})", func, arg),
            Expr::Op(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

impl Expr {
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn func(func: MathFunction, arg: Expr) -> Expr {
        Expr::Func(func, arg.boxed())
    }

    pub fn op(op: Operator, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Op(op, lhs.boxed(), rhs.boxed())
    }

    /// Renders the tree back into whitespace separated RPN tokens (post-order),
    /// the form the compiler accepts.
    pub fn to_rpn(&self) -> String {
        let mut tokens: Vec<String> = Vec::new();
        self.collect_rpn(&mut tokens);
        tokens.join(" ")
    }

    fn collect_rpn(&self, tokens: &mut Vec<String>) {
        match self {
            Expr::Var(name) => tokens.push(name.to_string()),
            Expr::Const(val) => tokens.push(val.to_string()),
            Expr::Func(func, arg) => {
                arg.collect_rpn(tokens);
                tokens.push(func.to_string());
            }
            Expr::Op(op, lhs, rhs) => {
                lhs.collect_rpn(tokens);
                rhs.collect_rpn(tokens);
                tokens.push(op.to_string());
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Const(_) => 1,
            Expr::Func(_, arg) => 1 + arg.node_count(),
            Expr::Op(_, lhs, rhs) => 1 + lhs.node_count() + rhs.node_count(),
        }
    }

    /// number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) | Expr::Const(_) => 1,
            Expr::Func(_, arg) => 1 + arg.depth(),
            Expr::Op(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    pub fn contains_variable(&self) -> bool {
        match self {
            Expr::Var(_) => true,
            Expr::Const(_) => false,
            Expr::Func(_, arg) => arg.contains_variable(),
            Expr::Op(_, lhs, rhs) => lhs.contains_variable() || rhs.contains_variable(),
        }
    }
}

/// Consumes the tree. Every node is freed exactly once by the drop glue; the
/// handle cannot be used afterwards.
pub fn destroy(expr: Expr) {
    debug!("releasing expression tree of {} nodes", expr.node_count());
    drop(expr);
}
