//! Brute-force estimate of the supremum / infimum of an expression on a closed interval.
//!
//! The function is sampled on the grid `a, a + h, a + 2h, ...` up to `b`, and at `b`
//! itself. This is not an analytic extremum finder: an extremum that falls strictly
//! between two samples is missed, the error shrinks with `h` while the cost grows as
//! `(b - a) / h` evaluations.
use crate::symbolic::rpn_engine::Expr;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ExtremumKind {
    Min,
    Max,
}

impl ExtremumKind {
    /// true when `value` strictly improves on `current`; NaN never improves
    fn improves(&self, value: f64, current: f64) -> bool {
        match self {
            ExtremumKind::Min => value < current,
            ExtremumKind::Max => value > current,
        }
    }
}

/// Grid search for the minimum or maximum of `expr` on `[a, b]` with step `step`.
///
/// The search is seeded with `f(a)`. A NaN seed is never replaced because NaN does not
/// compare, which is the same thing the plain `<` / `>` comparison does sample by sample.
///
/// # Panics
/// `step` must be positive and finite and `a <= b` with both ends finite. Violating this
/// is a bug in the caller (the integration engine validates user input beforehand), not a
/// numerical outcome.
pub fn find_extremum(expr: &Expr, a: f64, b: f64, step: f64, kind: ExtremumKind) -> f64 {
    assert!(
        step.is_finite() && step > 0.0,
        "extremum search step must be positive and finite, got {}",
        step
    );
    assert!(
        a.is_finite() && b.is_finite() && a <= b,
        "extremum search needs a finite ascending interval, got [{}, {}]",
        a,
        b
    );

    let mut extremum = expr.eval(a);
    let n_steps = ((b - a) / step).floor() as u64;
    for i in 1..=n_steps {
        let x = (a + i as f64 * step).min(b);
        let value = expr.eval(x);
        if kind.improves(value, extremum) {
            extremum = value;
        }
    }
    let value = expr.eval(b);
    if kind.improves(value, extremum) {
        extremum = value;
    }
    extremum
}

pub fn find_infimum(expr: &Expr, a: f64, b: f64, step: f64) -> f64 {
    find_extremum(expr, a, b, step, ExtremumKind::Min)
}

pub fn find_supremum(expr: &Expr, a: f64, b: f64, step: f64) -> f64 {
    find_extremum(expr, a, b, step, ExtremumKind::Max)
}
