#![allow(non_snake_case)]
use clap::Parser;
use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use RustedIntegral::Utils::function_log::{FunctionLog, LogEntry, format_interval};
use RustedIntegral::Utils::logger::{init_logger, parse_level};
use RustedIntegral::Utils::report::IntegralReport;
use RustedIntegral::Utils::settings::AppSettings;
use RustedIntegral::Utils::validation::{parse_interval, parse_refinement, validate_integrand};
use RustedIntegral::errors::IntegralError;
use RustedIntegral::numerical::riemann_darboux::{
    IntegrationSettings, Integrator, MAX_REFINEMENT, MIN_REFINEMENT,
};
use RustedIntegral::symbolic::rpn_engine::Expr;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Riemann and Darboux sums of functions written in Reverse Polish Notation",
    long_about = None
)]
struct Cli {
    /// settings document with sections parser, integration, logging, storage
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// debug, info, warn, error or off
    #[arg(short, long)]
    loglevel: Option<String>,
    /// also write the log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// where integrated functions are saved
    #[arg(short, long)]
    functions_file: Option<PathBuf>,
}

const RULES: &str = "Welcome to numerical integration!
--------------------------------------------------------------------------------
| The rules of integrating:
| \t a. Enter the integrand in Reverse Polish Notation, e.g. `x 2 ^ x sin +`.
| \t b. Separate all operands and operators by spaces.
| \t c. Functions: sin cos tg ctg ln exp, operators: + - * / ^.
| \t d. The entry for the integrand must not exceed 100 characters.
| \t e. The interval is entered as its two ends, a reversed interval flips the sign.
--------------------------------------------------------------------------------
";

const MENU: &str = "
I can do the following tasks for you:
\t 1. Numerical integration
\t 2. Integrate the last saved function
\t 3. List the functions that have been saved
\t Other: Exit

To execute a task, enter a number chosen from above: ";

#[derive(Debug, Clone, Copy, PartialEq)]
enum MenuChoice {
    Integrate,
    IntegrateLast,
    ListSaved,
    Exit,
}

impl MenuChoice {
    fn from_input(input: &str) -> MenuChoice {
        match input.trim() {
            "1" => MenuChoice::Integrate,
            "2" => MenuChoice::IntegrateLast,
            "3" => MenuChoice::ListSaved,
            _ => MenuChoice::Exit,
        }
    }
}

struct Session {
    settings: AppSettings,
    functions: FunctionLog,
}

impl Session {
    fn new(settings: AppSettings) -> Session {
        let functions = FunctionLog::new(&settings.storage.functions_file);
        Session {
            settings,
            functions,
        }
    }

    /// validate -> compile -> integrate, the compiled tree is dropped on return
    fn integrate(
        &self,
        integrand: &str,
        interval: &str,
        refinement: u32,
    ) -> Result<IntegralReport, IntegralError> {
        let integrand = validate_integrand(integrand)?;
        let (start, end) = parse_interval(interval)?;
        let expr = Expr::parse_rpn_with(integrand, &self.settings.parser)?;
        let mut integrator = Integrator::new(IntegrationSettings {
            refinement,
            ..self.settings.integration.clone()
        });
        let sums = integrator.integrate(&expr, start, end)?;
        Ok(IntegralReport {
            integrand: integrand.to_string(),
            start,
            end,
            refinement,
            sums,
            timings_ms: integrator.timer.as_millis(),
        })
    }

    /// Asks for a new integrand and interval, saves them and integrates.
    fn integrate_new<R: BufRead>(&self, input: &mut R) -> Result<(), IntegralError> {
        let Some(integrand) = prompt(input, "Integrand (RPN): ")? else {
            return Ok(());
        };
        let integrand = validate_integrand(&integrand)?.to_string();
        let Some(start) = prompt(input, "Start of the interval: ")? else {
            return Ok(());
        };
        let Some(end) = prompt(input, "End of the interval: ")? else {
            return Ok(());
        };
        let interval = format_interval(&start, &end);
        self.functions.append(&integrand, &interval)?;
        self.integrate_entry(
            input,
            &LogEntry {
                integrand,
                interval,
            },
        )
    }

    fn integrate_last<R: BufRead>(&self, input: &mut R) -> Result<(), IntegralError> {
        match self.functions.last_entry()? {
            Some(entry) => {
                println!("Function to integrate: {}", entry.integrand);
                println!("Interval: {}", entry.interval);
                self.integrate_entry(input, &entry)
            }
            None => {
                warn!("{} holds no saved function", self.functions.path().display());
                Ok(())
            }
        }
    }

    fn integrate_entry<R: BufRead>(
        &self,
        input: &mut R,
        entry: &LogEntry,
    ) -> Result<(), IntegralError> {
        let question = format!(
            "Enter the scale of refinement (x in [{} ; {}]): ",
            MIN_REFINEMENT, MAX_REFINEMENT
        );
        let Some(refinement) = prompt(input, &question)? else {
            return Ok(());
        };
        let refinement = parse_refinement(&refinement)?;
        let report = self.integrate(&entry.integrand, &entry.interval, refinement)?;
        println!("\n{}", report);
        Ok(())
    }

    fn list_saved(&self) -> Result<(), IntegralError> {
        print!("{}", self.functions.contents()?);
        Ok(())
    }

    fn run<R: BufRead>(&self, input: &mut R) -> io::Result<()> {
        println!("{}", RULES);
        loop {
            let choice = match prompt(input, MENU)? {
                Some(line) => MenuChoice::from_input(&line),
                None => MenuChoice::Exit,
            };
            println!();
            let outcome = match choice {
                MenuChoice::Integrate => self.integrate_new(input),
                MenuChoice::IntegrateLast => self.integrate_last(input),
                MenuChoice::ListSaved => self.list_saved(),
                MenuChoice::Exit => {
                    info!("exit");
                    return Ok(());
                }
            };
            // a failed attempt is reported, the menu keeps running
            if let Err(e) = outcome {
                error!("{}", e);
                println!("Error: {}", e);
            }
        }
    }
}

/// Prints the question and reads one line; `None` at end of input.
fn prompt<R: BufRead>(input: &mut R, question: &str) -> io::Result<Option<String>> {
    print!("{}", question);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn load_settings(cli: &Cli) -> Result<AppSettings, IntegralError> {
    let mut settings = match &cli.config {
        Some(path) => AppSettings::from_file(path)?,
        None => AppSettings::default(),
    };
    if let Some(level) = &cli.loglevel {
        settings.logging.level = parse_level(level)?;
    }
    if let Some(file) = &cli.log_file {
        settings.logging.to_file = true;
        settings.logging.file = Some(file.clone());
    }
    if let Some(file) = &cli.functions_file {
        settings.storage.functions_file = file.clone();
    }
    Ok(settings)
}

fn main() {
    let cli = Cli::parse();
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = init_logger(&settings.logging) {
        eprintln!("could not create the log file: {}", e);
    }
    let session = Session::new(settings);
    let stdin = io::stdin();
    if let Err(e) = session.run(&mut stdin.lock()) {
        error!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn session_in(dir: &std::path::Path) -> Session {
        let mut settings = AppSettings::default();
        settings.storage.functions_file = dir.join("functions.txt");
        Session::new(settings)
    }

    #[test]
    fn test_menu_choice() {
        assert_eq!(MenuChoice::from_input("1\n"), MenuChoice::Integrate);
        assert_eq!(MenuChoice::from_input(" 2"), MenuChoice::IntegrateLast);
        assert_eq!(MenuChoice::from_input("3"), MenuChoice::ListSaved);
        assert_eq!(MenuChoice::from_input("9"), MenuChoice::Exit);
        assert_eq!(MenuChoice::from_input("abc"), MenuChoice::Exit);
    }

    #[test]
    fn test_session_integrate() {
        let dir = tempdir().unwrap();
        let session = session_in(dir.path());
        let report = session.integrate("5", "[0 ; 2]", 1).unwrap();
        assert_relative_eq!(report.sums.riemann, 10.0);
        assert_relative_eq!(report.sums.upper_darboux, 10.0);

        let report = session.integrate("x", "[1 ; 0]", 10).unwrap();
        assert_relative_eq!(report.sums.riemann, -0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_session_errors() {
        let dir = tempdir().unwrap();
        let session = session_in(dir.path());
        assert!(matches!(
            session.integrate("x +", "[0 ; 1]", 10),
            Err(IntegralError::Compile(_))
        ));
        assert!(matches!(
            session.integrate("x", "[ ; ]", 10),
            Err(IntegralError::Validation(_))
        ));
        assert!(matches!(
            session.integrate("x", "[0 ; 1]", 0),
            Err(IntegralError::Validation(_))
        ));
        assert!(matches!(
            session.integrate("1", "[-1e308 ; 1e308]", 2),
            Err(IntegralError::Validation(_))
        ));
    }

    #[test]
    fn test_run_saves_and_reintegrates() {
        let dir = tempdir().unwrap();
        let session = session_in(dir.path());
        let mut input = Cursor::new("1\nx x *\n0\n1\n10\n2\n10\n3\n4\n");
        session.run(&mut input).unwrap();
        let entries = session.functions.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].integrand, "x x *");
        assert_eq!(entries[0].interval, "[0 ; 1]");
    }

    #[test]
    fn test_run_survives_errors_and_eof() {
        let dir = tempdir().unwrap();
        let session = session_in(dir.path());
        // nothing saved yet, then a broken integrand, then end of input
        let mut input = Cursor::new("2\n3\n1\nx +\n0\n1\n5\n");
        session.run(&mut input).unwrap();
        assert_eq!(
            session.functions.last_entry().unwrap().unwrap().integrand,
            "x +"
        );
    }
}
