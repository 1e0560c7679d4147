//! Checks on the raw text handed to the integration engine: integrand length, the
//! `"[start ; end]"` interval line and the scale of refinement.
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::multispace0,
    number::complete::double,
    sequence::{delimited, separated_pair},
};

use crate::errors::ValidationError;
use crate::numerical::riemann_darboux::{MAX_REFINEMENT, MIN_REFINEMENT};

/// longest accepted integrand, in characters
pub const MAX_INTEGRAND_LENGTH: usize = 100;

/// Trims the integrand and checks its length.
pub fn validate_integrand(integrand: &str) -> Result<&str, ValidationError> {
    let integrand = integrand.trim();
    if integrand.is_empty() {
        return Err(ValidationError::EmptyIntegrand);
    }
    let length = integrand.chars().count();
    if length > MAX_INTEGRAND_LENGTH {
        return Err(ValidationError::IntegrandTooLong {
            length,
            max: MAX_INTEGRAND_LENGTH,
        });
    }
    Ok(integrand)
}

/// `[ ; ]`, an interval whose ends were never entered
fn undefined_interval(input: &str) -> IResult<&str, &str> {
    delimited(
        (multispace0, tag("[")),
        delimited(multispace0, tag(";"), multispace0),
        (tag("]"), multispace0),
    )
    .parse(input)
}

/// `[<start> ; <end>]`, whitespace around the numbers is optional
fn defined_interval(input: &str) -> IResult<&str, (f64, f64)> {
    delimited(
        (multispace0, tag("["), multispace0),
        separated_pair(double, (multispace0, tag(";"), multispace0), double),
        (multispace0, tag("]"), multispace0),
    )
    .parse(input)
}

/// Parses an interval line and rejects undefined and `[c ; c]` intervals.
pub fn parse_interval(interval: &str) -> Result<(f64, f64), ValidationError> {
    if let Ok((rest, _)) = undefined_interval(interval) {
        if rest.is_empty() {
            return Err(ValidationError::UndefinedInterval);
        }
    }
    let (start, end) = match defined_interval(interval) {
        Ok(("", bounds)) => bounds,
        _ => {
            return Err(ValidationError::MalformedInterval(
                interval.trim().to_string(),
            ));
        }
    };
    if !start.is_finite() || !end.is_finite() {
        return Err(ValidationError::NonFiniteBound { start, end });
    }
    if start == end {
        return Err(ValidationError::DegenerateInterval(start));
    }
    Ok((start, end))
}

pub fn validate_refinement(refinement: i64) -> Result<u32, ValidationError> {
    if refinement < MIN_REFINEMENT as i64 || refinement > MAX_REFINEMENT as i64 {
        return Err(ValidationError::RefinementOutOfBounds {
            value: refinement,
            min: MIN_REFINEMENT,
            max: MAX_REFINEMENT,
        });
    }
    Ok(refinement as u32)
}

/// Parses the refinement as typed by the user.
pub fn parse_refinement(input: &str) -> Result<u32, ValidationError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidSetting {
            key: "refinement".to_string(),
            message: format!("'{}' is not an integer", input.trim()),
        })?;
    validate_refinement(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_integrand() {
        assert_eq!(validate_integrand("  x x *  \n").unwrap(), "x x *");
        assert_eq!(
            validate_integrand("   ").unwrap_err(),
            ValidationError::EmptyIntegrand
        );
        let long = "x ".repeat(50) + "x";
        assert_eq!(
            validate_integrand(&long).unwrap_err(),
            ValidationError::IntegrandTooLong {
                length: 101,
                max: 100
            }
        );
        let exact = "1".repeat(100);
        assert!(validate_integrand(&exact).is_ok());
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("[0 ; 2]").unwrap(), (0.0, 2.0));
        assert_eq!(parse_interval("[-1.5;3e2]").unwrap(), (-1.5, 300.0));
        assert_eq!(parse_interval("  [ 4 ;  -2.25 ]\n").unwrap(), (4.0, -2.25));
    }

    #[test]
    fn test_undefined_interval() {
        assert_eq!(
            parse_interval("[ ; ]").unwrap_err(),
            ValidationError::UndefinedInterval
        );
        assert_eq!(
            parse_interval("[;]\n").unwrap_err(),
            ValidationError::UndefinedInterval
        );
    }

    #[test]
    fn test_degenerate_interval() {
        assert_eq!(
            parse_interval("[1.5 ; 1.5]").unwrap_err(),
            ValidationError::DegenerateInterval(1.5)
        );
    }

    #[test]
    fn test_malformed_interval() {
        for input in ["0 ; 1", "[0 ; ]", "[a ; 1]", "[0 ; 1] trailing", "[0, 1]", ""] {
            assert!(
                matches!(
                    parse_interval(input),
                    Err(ValidationError::MalformedInterval(_))
                ),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_refinement() {
        assert_eq!(validate_refinement(1).unwrap(), 1);
        assert_eq!(validate_refinement(20_000_000).unwrap(), 20_000_000);
        assert!(validate_refinement(0).is_err());
        assert!(validate_refinement(-5).is_err());
        assert!(validate_refinement(20_000_001).is_err());
        assert_eq!(parse_refinement(" 250\n").unwrap(), 250);
        assert!(matches!(
            parse_refinement("many"),
            Err(ValidationError::InvalidSetting { .. })
        ));
    }
}
