//! Text file that keeps every integrated function: one line with the RPN integrand
//! followed by one line with the interval `[start ; end]`.
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FUNCTIONS_FILE: &str = "functions.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub integrand: String,
    pub interval: String,
}

/// the interval line as it is written to the log
pub fn format_interval(start: &str, end: &str) -> String {
    format!("[{} ; {}]", start.trim(), end.trim())
}

#[derive(Debug, Clone)]
pub struct FunctionLog {
    path: PathBuf,
}

impl FunctionLog {
    pub fn new<P: AsRef<Path>>(path: P) -> FunctionLog {
        FunctionLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends an integrand line and an interval line, creating the file if needed.
    pub fn append(&self, integrand: &str, interval: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", integrand.trim())?;
        writeln!(file, "{}", interval.trim())?;
        info!("saved {} on {} to {}", integrand.trim(), interval.trim(), self.path.display());
        Ok(())
    }

    pub fn contents(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    /// All saved (integrand, interval) pairs, oldest first. Blank lines are skipped, a
    /// dangling integrand without interval is dropped.
    pub fn entries(&self) -> io::Result<Vec<LogEntry>> {
        let contents = self.contents()?;
        let lines: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() % 2 != 0 {
            warn!(
                "{} has an odd number of lines, the last integrand has no interval",
                self.path.display()
            );
        }
        Ok(lines
            .chunks_exact(2)
            .map(|pair| LogEntry {
                integrand: pair[0].to_string(),
                interval: pair[1].to_string(),
            })
            .collect())
    }

    /// The most recently saved integrand and its interval. `None` when the file holds no
    /// complete pair or ends with an integrand that has no interval.
    pub fn last_entry(&self) -> io::Result<Option<LogEntry>> {
        let contents = self.contents()?;
        let lines: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() % 2 != 0 {
            warn!(
                "{} ends with an integrand that has no interval",
                self.path.display()
            );
            return Ok(None);
        }
        match lines.as_slice() {
            [.., integrand, interval] => Ok(Some(LogEntry {
                integrand: integrand.to_string(),
                interval: interval.to_string(),
            })),
            _ => Ok(None),
        }
    }
}

impl Default for FunctionLog {
    fn default() -> Self {
        FunctionLog::new(DEFAULT_FUNCTIONS_FILE)
    }
}
