/*
Console report of one integration: the three sums, how far apart the Darboux sums are, their
average and how far the Riemann sum is from it, plus the time spent on every sum.
*/
use std::fmt;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::numerical::riemann_darboux::IntegralSums;

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct ReportRow {
    quantity: &'static str,
    value: String,
    #[tabled(rename = "time, ms")]
    time_ms: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegralReport {
    pub integrand: String,
    pub start: f64,
    pub end: f64,
    pub refinement: u32,
    pub sums: IntegralSums,
    /// Riemann, lower Darboux, upper Darboux
    pub timings_ms: [f64; 3],
}

fn fixed(value: f64) -> String {
    format!("{:.6}", value)
}

impl IntegralReport {
    pub fn rows(&self) -> Vec<ReportRow> {
        let sums = &self.sums;
        let timed = |quantity: &'static str, value: f64, time: f64| ReportRow {
            quantity,
            value: fixed(value),
            time_ms: format!("{:.3}", time),
        };
        let untimed = |quantity: &'static str, value: f64| ReportRow {
            quantity,
            value: fixed(value),
            time_ms: String::new(),
        };
        vec![
            timed("Riemann-sum", sums.riemann, self.timings_ms[0]),
            timed("Lower Darboux-sum", sums.lower_darboux, self.timings_ms[1]),
            timed("Upper Darboux-sum", sums.upper_darboux, self.timings_ms[2]),
            untimed("Difference between Darboux-sums", sums.darboux_difference()),
            untimed("Average of the Darboux-sums", sums.darboux_average()),
            untimed(
                "Difference between Riemann-sum and average of the Darboux-sums",
                sums.riemann_vs_average(),
            ),
        ]
    }
}

impl fmt::Display for IntegralReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "∫[{} ; {}] {} dx, refinement {}",
            self.start, self.end, self.integrand, self.refinement
        )?;
        let mut table = Table::new(self.rows());
        table.with(Style::modern_rounded());
        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> IntegralReport {
        IntegralReport {
            integrand: "x".to_string(),
            start: 1.0,
            end: 0.0,
            refinement: 10,
            sums: IntegralSums {
                riemann: -0.45,
                lower_darboux: -0.45,
                upper_darboux: -0.55,
            },
            timings_ms: [0.1, 2.0, 2.5],
        }
    }

    #[test]
    fn test_rows_fixed_precision() {
        let rows = report().rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].value, "-0.450000");
        assert_eq!(rows[2].value, "-0.550000");
        assert_eq!(rows[3].value, "0.100000");
        assert_eq!(rows[4].value, "-0.500000");
        assert_eq!(rows[5].value, "0.050000");
        assert_eq!(rows[1].time_ms, "2.000");
        assert!(rows[4].time_ms.is_empty());
    }

    #[test]
    fn test_display_contains_sums() {
        let text = report().to_string();
        assert!(text.starts_with("∫[1 ; 0] x dx, refinement 10"));
        assert!(text.contains("Upper Darboux-sum"));
        assert!(text.contains("-0.550000"));
    }
}
