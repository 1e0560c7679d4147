#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
///____________________________________________________________________________________________________________________________
/// # RPN engine
/// expression tree of a function of one variable: variable, constants, unary functions
/// (sin, cos, tg, ctg, ln, exp) and binary operators (+ - * / ^)
///# Example
/// ```
/// use RustedIntegral::symbolic::rpn_engine::Expr;
/// let f = Expr::parse_rpn("x 2 ^ x sin +").unwrap();
/// println!("parsed expression {}", f);
/// // back to RPN
/// assert_eq!(f.to_rpn(), "x 2 ^ x sin +");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod rpn_engine;
/// turns Reverse Polish Notation text into an expression tree
pub mod rpn_parser;
/// bounded stack of pending subtrees used by the compiler
pub mod parse_stack;
///______________________________________________________________________________________________________________________________
/// evaluation of the expression tree
/// Example#
/// ```
/// use RustedIntegral::symbolic::rpn_engine::Expr;
/// let f = Expr::parse_rpn("x x *").unwrap();
/// assert_eq!(f.eval(3.0), 9.0);
/// let func = f.lambdify1D();
/// assert_eq!(func(-2.0), 4.0);
/// ```
pub mod rpn_evaluate;
