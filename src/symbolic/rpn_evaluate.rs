use crate::symbolic::rpn_engine::Expr;

impl Expr {
    /// Evaluates the tree for the value `x` of the free variable.
    ///
    /// Operators follow plain IEEE-754 double arithmetic: `1/0` is `inf`, `ln(-1)` and
    /// `(-8)^(1/3)` are `NaN`. Nothing is masked, the caller decides what to do with
    /// non-finite values. The result only depends on `(self, x)`.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Var(_) => x,
            Expr::Const(val) => *val,
            Expr::Func(func, arg) => func.apply(arg.eval(x)),
            Expr::Op(op, lhs, rhs) => {
                let left = lhs.eval(x);
                let right = rhs.eval(x);
                op.apply(left, right)
            }
        }
    }

    /// Borrowing closure over the tree, handy for the samplers of the integration engine.
    ///
    /// # Examples
    /// ```
    /// use RustedIntegral::symbolic::rpn_engine::Expr;
    /// let f = Expr::parse_rpn("x x *").unwrap();
    /// let func = f.lambdify1D();
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64 + '_> {
        Box::new(move |x| self.eval(x))
    }
}

/// An absent expression (empty input) evaluates to `0.0`.
pub fn evaluate(ast: Option<&Expr>, x: f64) -> f64 {
    match ast {
        Some(expr) => expr.eval(x),
        None => 0.0,
    }
}
