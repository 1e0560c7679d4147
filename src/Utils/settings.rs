/// parse a settings document with structure like
/// ```text
/// integration
///     refinement: 1000
///     step: 1e-5
/// logging
///     loglevel: debug
/// ```
/// i.e. section titles followed by `key: value` pairs, into [`AppSettings`]. Lines starting
/// with `//`, `#` or `%` are comments. Every key is optional, missing keys keep their defaults.
use log::debug;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::recognize,
    multi::{many0, many1},
    sequence::{delimited, pair, separated_pair},
};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Utils::function_log::DEFAULT_FUNCTIONS_FILE;
use crate::Utils::logger::{LogSettings, parse_level};
use crate::Utils::validation::validate_refinement;
use crate::errors::{IntegralError, ValidationError};
use crate::numerical::riemann_darboux::{IntegrationSettings, RiemannRule};
use crate::symbolic::rpn_parser::ParserSettings;

type SectionMap = HashMap<String, String>;
type DocumentMap = HashMap<String, SectionMap>;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageSettings {
    pub functions_file: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            functions_file: PathBuf::from(DEFAULT_FUNCTIONS_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppSettings {
    pub parser: ParserSettings,
    pub integration: IntegrationSettings,
    pub logging: LogSettings,
    pub storage: StorageSettings,
}

/// identifier: letters, digits and underscores, not starting with a digit
fn parse_identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

fn parse_value(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace()).parse(input)
}

fn parse_key_value_pair(input: &str) -> IResult<&str, (String, String)> {
    let (input, _) = multispace0(input)?;
    let colon_separator = delimited(space0, tag(":"), space0);
    let (input, (key, value)) =
        separated_pair(parse_identifier, colon_separator, parse_value).parse(input)?;
    Ok((input, (key.to_string(), value.to_string())))
}

fn parse_section(input: &str) -> IResult<&str, (String, SectionMap)> {
    let (input, _) = multispace0(input)?;
    let (input, title) = parse_identifier(input)?;
    let (input, pairs) = many1(parse_key_value_pair).parse(input)?;
    Ok((input, (title.to_string(), pairs.into_iter().collect())))
}

fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with('#') && !trimmed.starts_with('%')
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the whole document into section title -> (key -> raw value).
pub fn parse_document(input: &str) -> Result<DocumentMap, ValidationError> {
    let filtered = filter_comments(input);
    if filtered.trim().is_empty() {
        return Ok(HashMap::new());
    }
    let mut parser = many1(parse_section);
    match parser.parse(filtered.as_str()) {
        Ok((remaining, sections)) => {
            if !remaining.trim().is_empty() {
                return Err(ValidationError::InvalidSetting {
                    key: "document".to_string(),
                    message: format!("failed to parse '{}'", remaining.trim()),
                });
            }
            let mut document: DocumentMap = HashMap::new();
            for (title, section) in sections {
                document.entry(title).or_default().extend(section);
            }
            Ok(document)
        }
        Err(e) => Err(ValidationError::InvalidSetting {
            key: "document".to_string(),
            message: format!("parsing error: {:?}", e),
        }),
    }
}

fn invalid(section: &str, key: &str, message: String) -> ValidationError {
    ValidationError::InvalidSetting {
        key: format!("{}.{}", section, key),
        message,
    }
}

fn parse_number<T: FromStr>(section: &str, key: &str, value: &str) -> Result<T, ValidationError> {
    value
        .parse::<T>()
        .map_err(|_| invalid(section, key, format!("'{}' is not a valid number", value)))
}

impl AppSettings {
    pub fn from_document(input: &str) -> Result<AppSettings, ValidationError> {
        let document = parse_document(input)?;
        let mut settings = AppSettings::default();
        for (section, pairs) in &document {
            for (key, value) in pairs {
                settings.apply(section, key, value)?;
            }
        }
        settings.integration.validate()?;
        debug!("settings: {:?}", settings);
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<AppSettings, IntegralError> {
        let text = fs::read_to_string(path)?;
        Ok(AppSettings::from_document(&text)?)
    }

    fn apply(&mut self, section: &str, key: &str, value: &str) -> Result<(), ValidationError> {
        match (section, key) {
            ("parser", "variable") => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_alphabetic() => self.parser.variable = c,
                    _ => {
                        return Err(invalid(
                            section,
                            key,
                            format!("'{}' must be a single letter", value),
                        ));
                    }
                }
            }
            ("parser", "stack_capacity") => {
                let capacity: usize = parse_number(section, key, value)?;
                if capacity == 0 {
                    return Err(invalid(section, key, "must be at least 1".to_string()));
                }
                self.parser.stack_capacity = capacity;
            }
            ("integration", "refinement") => {
                let refinement: i64 = parse_number(section, key, value)?;
                self.integration.refinement = validate_refinement(refinement)?;
            }
            ("integration", "step") => {
                let step: f64 = parse_number(section, key, value)?;
                if !(step.is_finite() && step > 0.0) {
                    return Err(ValidationError::InvalidStep(step));
                }
                self.integration.step = step;
            }
            ("integration", "rule") => {
                self.integration.rule = RiemannRule::from_str(&value.to_lowercase()).map_err(
                    |_| invalid(section, key, format!("'{}', must be left, right or midpoint", value)),
                )?;
            }
            ("logging", "loglevel") => self.logging.level = parse_level(value)?,
            ("logging", "log_to_file") => {
                self.logging.to_file = value
                    .parse::<bool>()
                    .map_err(|_| invalid(section, key, format!("'{}' is not true/false", value)))?;
            }
            ("logging", "log_file") => self.logging.file = Some(PathBuf::from(value)),
            ("storage", "functions_file") => self.storage.functions_file = PathBuf::from(value),
            _ => {
                return Err(invalid(section, key, "unknown setting".to_string()));
            }
        }
        Ok(())
    }
}
