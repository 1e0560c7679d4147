//! # Riemann and Darboux sums
//!
//! The integration interval `[start, end]` is split into `refinement` equal sub-intervals
//! of width `dx = (end - start) / refinement`. Three estimates of the definite integral
//! are computed from the same expression tree:
//!
//! - **Riemann sum**: `sum f(x_i) * dx`, `x_i` the left edge of sub-interval `i`
//!   (or the right edge / the midpoint, see [`RiemannRule`])
//! - **lower Darboux sum**: `sum inf_i * dx`, `inf_i` from the grid search of
//!   [`crate::numerical::extremum`] with the fine step `step`
//! - **upper Darboux sum**: `sum sup_i * dx`, analogously
//!
//! A reversed interval (`start > end`) is integrated on `[end, start]` and all three sums
//! are negated. `start == end` is rejected, and so is an interval whose width or number of
//! grid samples `(end - start) / step` overflows `f64`.
//!
//! The fine `step` trades accuracy of the Darboux sums against time: every sub-interval
//! costs about `dx / step` evaluations, so a whole Darboux sum costs
//! `(end - start) / step` evaluations plus two per sub-interval.
//!
//! # Example
//! ```
//! use RustedIntegral::numerical::riemann_darboux::integrate;
//! use RustedIntegral::symbolic::rpn_engine::Expr;
//! let f = Expr::parse_rpn("5").unwrap();
//! let sums = integrate(&f, 0.0, 2.0, 1).unwrap();
//! assert_eq!(sums.riemann, 10.0);
//! assert_eq!(sums.lower_darboux, 10.0);
//! assert_eq!(sums.upper_darboux, 10.0);
//! ```
use log::{debug, info};
use strum_macros::{Display, EnumString};

use crate::Utils::timer::SumsTimer;
use crate::errors::ValidationError;
use crate::numerical::extremum::{find_infimum, find_supremum};
use crate::symbolic::rpn_engine::Expr;

/// default grid step of the extremum search
pub const DEFAULT_STEP: f64 = 1e-5;
pub const DEFAULT_REFINEMENT: u32 = 1000;
pub const MIN_REFINEMENT: u32 = 1;
pub const MAX_REFINEMENT: u32 = 20_000_000;

/// Sampling point of the Riemann sum inside each sub-interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RiemannRule {
    #[default]
    Left,
    Right,
    Midpoint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationSettings {
    /// number of equal sub-intervals
    pub refinement: u32,
    /// grid step of the extremum search used by the Darboux sums
    pub step: f64,
    pub rule: RiemannRule,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        IntegrationSettings {
            refinement: DEFAULT_REFINEMENT,
            step: DEFAULT_STEP,
            rule: RiemannRule::Left,
        }
    }
}

impl IntegrationSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.refinement < MIN_REFINEMENT || self.refinement > MAX_REFINEMENT {
            return Err(ValidationError::RefinementOutOfBounds {
                value: self.refinement as i64,
                min: MIN_REFINEMENT,
                max: MAX_REFINEMENT,
            });
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ValidationError::InvalidStep(self.step));
        }
        Ok(())
    }
}

/// The three estimates, sign already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralSums {
    pub riemann: f64,
    pub lower_darboux: f64,
    pub upper_darboux: f64,
}

impl IntegralSums {
    pub fn negated(&self) -> IntegralSums {
        IntegralSums {
            riemann: -self.riemann,
            lower_darboux: -self.lower_darboux,
            upper_darboux: -self.upper_darboux,
        }
    }

    pub fn darboux_difference(&self) -> f64 {
        (self.upper_darboux - self.lower_darboux).abs()
    }

    pub fn darboux_average(&self) -> f64 {
        (self.upper_darboux + self.lower_darboux) / 2.0
    }

    /// distance between the Riemann sum and the average of the Darboux sums
    pub fn riemann_vs_average(&self) -> f64 {
        (self.darboux_average() - self.riemann).abs()
    }
}

/// Integration engine: settings plus the diagnostic timer of the last run.
#[derive(Debug, Clone)]
pub struct Integrator {
    pub settings: IntegrationSettings,
    pub timer: SumsTimer,
}

impl Integrator {
    pub fn new(settings: IntegrationSettings) -> Integrator {
        Integrator {
            settings,
            timer: SumsTimer::new(),
        }
    }

    /// Validates the request, normalises the interval and computes the three sums.
    pub fn integrate(
        &mut self,
        expr: &Expr,
        start: f64,
        end: f64,
    ) -> Result<IntegralSums, ValidationError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ValidationError::NonFiniteBound { start, end });
        }
        if start == end {
            return Err(ValidationError::DegenerateInterval(start));
        }
        self.settings.validate()?;

        // ∫[a ; b] f(x) dx = (-1) * ∫[b ; a] f(x) dx
        let reversed = start > end;
        let (lo, hi) = if reversed { (end, start) } else { (start, end) };
        // finite ends can still overflow in hi - lo, e.g. [-1e308 ; 1e308]
        let width = hi - lo;
        if !width.is_finite() || !(width / self.settings.step).is_finite() {
            return Err(ValidationError::IntervalTooWide {
                start,
                end,
                step: self.settings.step,
            });
        }
        info!(
            "integrating {} on [{} ; {}], refinement {}, step {:e}, rule {}{}",
            expr,
            lo,
            hi,
            self.settings.refinement,
            self.settings.step,
            self.settings.rule,
            if reversed { " (reversed interval)" } else { "" }
        );

        self.timer.start();

        self.timer.riemann_tic();
        let riemann = self.riemann_sum(expr, lo, hi);
        self.timer.riemann_tac();

        self.timer.lower_darboux_tic();
        let lower_darboux = self.lower_darboux_sum(expr, lo, hi);
        self.timer.lower_darboux_tac();

        self.timer.upper_darboux_tic();
        let upper_darboux = self.upper_darboux_sum(expr, lo, hi);
        self.timer.upper_darboux_tac();

        let sums = IntegralSums {
            riemann,
            lower_darboux,
            upper_darboux,
        };
        debug!("sums on the ascending interval: {:?}", sums);
        self.timer.get_all();

        Ok(if reversed { sums.negated() } else { sums })
    }

    fn width(&self, start: f64, end: f64) -> f64 {
        (end - start) / self.settings.refinement as f64
    }

    /// `i`-th partition point; the last one is `end` exactly
    fn partition_point(&self, start: f64, end: f64, dx: f64, i: u32) -> f64 {
        if i == self.settings.refinement {
            end
        } else {
            start + i as f64 * dx
        }
    }

    /// Riemann sum on an ascending interval.
    pub fn riemann_sum(&self, expr: &Expr, start: f64, end: f64) -> f64 {
        assert!(start <= end, "riemann_sum expects an ascending interval");
        let dx = self.width(start, end);
        let mut riemann_sum = 0.0;
        for i in 0..self.settings.refinement {
            let x = match self.settings.rule {
                RiemannRule::Left => self.partition_point(start, end, dx, i),
                RiemannRule::Right => self.partition_point(start, end, dx, i + 1),
                RiemannRule::Midpoint => start + (i as f64 + 0.5) * dx,
            };
            riemann_sum += expr.eval(x) * dx;
        }
        riemann_sum
    }

    /// Lower Darboux sum on an ascending interval.
    pub fn lower_darboux_sum(&self, expr: &Expr, start: f64, end: f64) -> f64 {
        assert!(start <= end, "lower_darboux_sum expects an ascending interval");
        let dx = self.width(start, end);
        let mut lower_darboux_sum = 0.0;
        for i in 0..self.settings.refinement {
            let a = self.partition_point(start, end, dx, i);
            let b = self.partition_point(start, end, dx, i + 1);
            lower_darboux_sum += find_infimum(expr, a, b, self.settings.step) * dx;
        }
        lower_darboux_sum
    }

    /// Upper Darboux sum on an ascending interval.
    pub fn upper_darboux_sum(&self, expr: &Expr, start: f64, end: f64) -> f64 {
        assert!(start <= end, "upper_darboux_sum expects an ascending interval");
        let dx = self.width(start, end);
        let mut upper_darboux_sum = 0.0;
        for i in 0..self.settings.refinement {
            let a = self.partition_point(start, end, dx, i);
            let b = self.partition_point(start, end, dx, i + 1);
            upper_darboux_sum += find_supremum(expr, a, b, self.settings.step) * dx;
        }
        upper_darboux_sum
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Integrator::new(IntegrationSettings::default())
    }
}

/// Integrates with the default step and left-edge Riemann sampling.
pub fn integrate(
    expr: &Expr,
    start: f64,
    end: f64,
    refinement: u32,
) -> Result<IntegralSums, ValidationError> {
    let settings = IntegrationSettings {
        refinement,
        ..IntegrationSettings::default()
    };
    Integrator::new(settings).integrate(expr, start, end)
}
