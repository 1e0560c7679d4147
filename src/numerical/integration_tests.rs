//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use crate::errors::ValidationError;
    use crate::numerical::riemann_darboux::{
        IntegralSums, IntegrationSettings, Integrator, MAX_REFINEMENT, RiemannRule, integrate,
    };
    use crate::symbolic::rpn_engine::Expr;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn parse(input: &str) -> Expr {
        Expr::parse_rpn(input).unwrap()
    }

    fn integrator(refinement: u32, step: f64, rule: RiemannRule) -> Integrator {
        Integrator::new(IntegrationSettings {
            refinement,
            step,
            rule,
        })
    }

    #[test]
    fn test_constant_five_single_subinterval() {
        let f = parse("5");
        let sums = integrate(&f, 0.0, 2.0, 1).unwrap();
        assert_eq!(sums.riemann, 10.0);
        assert_eq!(sums.lower_darboux, 10.0);
        assert_eq!(sums.upper_darboux, 10.0);
    }

    #[test]
    fn test_constant_all_sums_agree() {
        for (c, a, b) in [(3.0, -1.0, 2.0), (-0.5, 0.0, 4.0), (12.25, 1.5, 1.75)] {
            let f = parse(&format!("{}", c));
            for n in [1, 7, 64] {
                let sums = integrator(n, 1e-3, RiemannRule::Left)
                    .integrate(&f, a, b)
                    .unwrap();
                let expected = c * (b - a);
                assert_relative_eq!(sums.riemann, expected, max_relative = 1e-12);
                assert_relative_eq!(sums.lower_darboux, expected, max_relative = 1e-12);
                assert_relative_eq!(sums.upper_darboux, expected, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_identity_riemann_sum() {
        let f = parse("x");
        let sums = integrate(&f, 0.0, 1.0, 1000).unwrap();
        // left-edge sum of x on [0, 1] is (n - 1) / (2n)
        assert_abs_diff_eq!(sums.riemann, 0.5, epsilon = 1e-3);
        assert_relative_eq!(sums.riemann, 0.4995, max_relative = 1e-10);
    }

    #[test]
    fn test_identity_darboux_sums() {
        let f = parse("x");
        let sums = integrator(10, 1e-3, RiemannRule::Left)
            .integrate(&f, 0.0, 1.0)
            .unwrap();
        assert_abs_diff_eq!(sums.lower_darboux, 0.45, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.upper_darboux, 0.55, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.riemann, 0.45, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.darboux_difference(), 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(sums.darboux_average(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_riemann_rules() {
        let f = parse("x");
        let right = integrator(10, 1e-3, RiemannRule::Right)
            .integrate(&f, 0.0, 1.0)
            .unwrap();
        assert_abs_diff_eq!(right.riemann, 0.55, epsilon = 1e-12);
        let midpoint = integrator(10, 1e-3, RiemannRule::Midpoint)
            .integrate(&f, 0.0, 1.0)
            .unwrap();
        assert_abs_diff_eq!(midpoint.riemann, 0.5, epsilon = 1e-12);
        // the rule only changes the Riemann sum
        assert_eq!(right.lower_darboux, midpoint.lower_darboux);
        assert_eq!(right.upper_darboux, midpoint.upper_darboux);
    }

    #[test]
    fn test_lower_not_above_upper() {
        for input in ["x x *", "x sin", "x exp", "0 x -", "x 3 ^ x 2 * -", "x cos x *"] {
            let f = parse(input);
            let sums = integrator(20, 1e-3, RiemannRule::Left)
                .integrate(&f, -2.0, 3.0)
                .unwrap();
            assert!(
                sums.lower_darboux <= sums.upper_darboux,
                "{}: {:?}",
                input,
                sums
            );
            assert!(sums.lower_darboux <= sums.riemann && sums.riemann <= sums.upper_darboux);
        }
    }

    #[test]
    fn test_darboux_sums_bracket_integral() {
        // ∫[-1 ; 1] x^2 dx = 2/3
        let f = parse("x 2 ^");
        let sums = integrator(200, 1e-4, RiemannRule::Left)
            .integrate(&f, -1.0, 1.0)
            .unwrap();
        assert!(sums.lower_darboux <= 2.0 / 3.0 && 2.0 / 3.0 <= sums.upper_darboux);
        assert_abs_diff_eq!(sums.darboux_average(), 2.0 / 3.0, epsilon = 1e-3);
        assert!(sums.darboux_difference() < 0.03);
    }

    #[test]
    fn test_swapped_interval_negates() {
        for input in ["x sin", "x x * 1 +", "4"] {
            let f = parse(input);
            let mut engine = integrator(50, 1e-3, RiemannRule::Left);
            let forward = engine.integrate(&f, 0.5, 2.5).unwrap();
            let backward = engine.integrate(&f, 2.5, 0.5).unwrap();
            assert_eq!(backward, forward.negated());
        }
    }

    #[test]
    fn test_reversed_constant() {
        let f = parse("5");
        let sums = integrate(&f, 2.0, 0.0, 1).unwrap();
        assert_eq!(sums.riemann, -10.0);
        assert_eq!(sums.lower_darboux, -10.0);
        assert_eq!(sums.upper_darboux, -10.0);
    }

    #[test]
    fn test_degenerate_interval_rejected() {
        let f = parse("x");
        assert_eq!(
            integrate(&f, 1.0, 1.0, 10).unwrap_err(),
            ValidationError::DegenerateInterval(1.0)
        );
    }

    #[test]
    fn test_refinement_bounds() {
        let f = parse("x");
        assert!(matches!(
            integrate(&f, 0.0, 1.0, 0),
            Err(ValidationError::RefinementOutOfBounds { value: 0, .. })
        ));
        assert!(matches!(
            integrate(&f, 0.0, 1.0, MAX_REFINEMENT + 1),
            Err(ValidationError::RefinementOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_invalid_step_and_bounds() {
        let f = parse("x");
        let mut engine = integrator(10, 0.0, RiemannRule::Left);
        assert_eq!(
            engine.integrate(&f, 0.0, 1.0).unwrap_err(),
            ValidationError::InvalidStep(0.0)
        );
        let mut engine = Integrator::default();
        assert!(matches!(
            engine.integrate(&f, 0.0, f64::INFINITY),
            Err(ValidationError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            engine.integrate(&f, f64::NAN, 1.0),
            Err(ValidationError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_overflowing_width_rejected() {
        let f = parse("1");
        // both ends finite, their distance is not
        assert!(matches!(
            integrate(&f, -1e308, 1e308, 2),
            Err(ValidationError::IntervalTooWide { .. })
        ));
        assert!(matches!(
            integrate(&f, 1e308, -1e308, 1),
            Err(ValidationError::IntervalTooWide { .. })
        ));
        // finite width, but the sample count (end - start) / step overflows
        let mut engine = integrator(1, 1e-300, RiemannRule::Left);
        assert!(matches!(
            engine.integrate(&f, 0.0, 1e10),
            Err(ValidationError::IntervalTooWide { .. })
        ));
    }

    #[test]
    fn test_non_finite_values_flow_through() {
        // 1/x has a pole at the left edge of the first sub-interval
        let f = parse("1 x /");
        let sums = integrator(4, 1e-2, RiemannRule::Left)
            .integrate(&f, 0.0, 1.0)
            .unwrap();
        assert_eq!(sums.riemann, f64::INFINITY);
        assert_eq!(sums.upper_darboux, f64::INFINITY);
        assert!(sums.lower_darboux.is_finite());
    }

    #[test]
    fn test_sums_helpers() {
        let sums = IntegralSums {
            riemann: 1.0,
            lower_darboux: 0.5,
            upper_darboux: 2.5,
        };
        assert_eq!(sums.darboux_difference(), 2.0);
        assert_eq!(sums.darboux_average(), 1.5);
        assert_eq!(sums.riemann_vs_average(), 0.5);
        let negated = sums.negated();
        assert_eq!(negated.upper_darboux, -2.5);
        assert_eq!(negated.darboux_difference(), 2.0);
    }

    #[test]
    fn test_timer_is_diagnostic_only() {
        let f = parse("x cos");
        let mut engine = integrator(16, 1e-3, RiemannRule::Left);
        let first = engine.integrate(&f, 0.0, 1.0).unwrap();
        let second = engine.integrate(&f, 0.0, 1.0).unwrap();
        assert_eq!(first, second);
        assert!(engine.timer.as_millis().iter().all(|t| *t >= 0.0));
    }
}
