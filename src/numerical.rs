/// brute-force search of the supremum/infimum of an expression on a closed interval
/// Example#
/// ```
/// use RustedIntegral::numerical::extremum::{find_extremum, ExtremumKind};
/// use RustedIntegral::symbolic::rpn_engine::Expr;
/// let f = Expr::parse_rpn("x x *").unwrap();
/// let sup = find_extremum(&f, -1.0, 2.0, 1e-3, ExtremumKind::Max);
/// assert_eq!(sup, 4.0);
/// ```
pub mod extremum;
/// Riemann sum, lower and upper Darboux sums of a function of one variable
/// Example#
/// ```
/// use RustedIntegral::numerical::riemann_darboux::{IntegrationSettings, Integrator, RiemannRule};
/// use RustedIntegral::symbolic::rpn_engine::Expr;
/// let f = Expr::parse_rpn("x sin").unwrap();
/// let settings = IntegrationSettings { refinement: 100, step: 1e-4, rule: RiemannRule::Midpoint };
/// let mut integrator = Integrator::new(settings);
/// let sums = integrator.integrate(&f, 0.0, std::f64::consts::PI).unwrap();
/// assert!(sums.lower_darboux <= 2.0 && 2.0 <= sums.upper_darboux);
/// println!("Riemann-sum = {:.6}", sums.riemann);
/// ```
pub mod riemann_darboux;
mod integration_tests;
