//! Wall-clock instrumentation of the three sums. Purely diagnostic: nothing measured
//! here feeds back into the computation.
use log::info;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tabled::{builder::Builder, settings::Style};

/// picks a readable unit for a duration and logs it
pub fn elapsed_time(elapsed: Duration) -> (String, f64) {
    let time = elapsed.as_millis();
    if time < 1000 {
        info!("Elapsed {} ms", time);
        (" ms".to_string(), elapsed.as_secs_f64() * 1000.0)
    } else if time < 60_000 {
        info!("Elapsed {} s", elapsed.as_secs());
        (" s".to_string(), elapsed.as_secs_f64())
    } else if time < 3_600_000 {
        info!("Elapsed {} min", elapsed.as_secs() / 60);
        (" min".to_string(), elapsed.as_secs_f64() / 60.0)
    } else {
        info!("Elapsed {} h", elapsed.as_secs() / 3600);
        (" h".to_string(), elapsed.as_secs_f64() / 3600.0)
    }
}

#[derive(Debug, Clone)]
pub struct SumsTimer {
    pub start: Instant,
    pub riemann_time: Instant,
    pub riemann: Duration,
    pub lower_darboux_time: Instant,
    pub lower_darboux: Duration,
    pub upper_darboux_time: Instant,
    pub upper_darboux: Duration,
}

impl SumsTimer {
    pub fn new() -> SumsTimer {
        SumsTimer {
            start: Instant::now(),
            riemann_time: Instant::now(),
            riemann: Duration::from_secs(0),
            lower_darboux_time: Instant::now(),
            lower_darboux: Duration::from_secs(0),
            upper_darboux_time: Instant::now(),
            upper_darboux: Duration::from_secs(0),
        }
    }

    pub fn start(&mut self) {
        *self = SumsTimer::new();
    }

    pub fn riemann_tic(&mut self) {
        self.riemann_time = Instant::now();
    }
    pub fn riemann_tac(&mut self) {
        self.riemann += self.riemann_time.elapsed();
    }

    pub fn lower_darboux_tic(&mut self) {
        self.lower_darboux_time = Instant::now();
    }
    pub fn lower_darboux_tac(&mut self) {
        self.lower_darboux += self.lower_darboux_time.elapsed();
    }

    pub fn upper_darboux_tic(&mut self) {
        self.upper_darboux_time = Instant::now();
    }
    pub fn upper_darboux_tac(&mut self) {
        self.upper_darboux += self.upper_darboux_time.elapsed();
    }

    /// per-sum durations in milliseconds: Riemann, lower Darboux, upper Darboux
    pub fn as_millis(&self) -> [f64; 3] {
        [
            self.riemann.as_secs_f64() * 1000.0,
            self.lower_darboux.as_secs_f64() * 1000.0,
            self.upper_darboux.as_secs_f64() * 1000.0,
        ]
    }

    /// Collects the timings with their share of the total and logs them as a table.
    pub fn get_all(&self) -> HashMap<String, String> {
        let mut timer_data: HashMap<String, String> = HashMap::new();

        let total = self.start.elapsed();
        let total_time = total.as_nanos().max(1) as f64;
        let total_time_string = elapsed_time(total);
        timer_data.insert(
            "time elapsed,".to_string() + total_time_string.0.as_str(),
            format!("{:.3}", total_time_string.1),
        );

        for (name, duration) in [
            ("Riemann sum", self.riemann),
            ("Lower Darboux sum", self.lower_darboux),
            ("Upper Darboux sum", self.upper_darboux),
        ] {
            let percent = 100.0 * duration.as_nanos() as f64 / total_time;
            let duration_string = elapsed_time(duration);
            timer_data.insert(
                format!("{} (%,{})", name, duration_string.0),
                format!(
                    "{}, {:.3}",
                    (percent * 1000.0).round() / 1000.0,
                    duration_string.1
                ),
            );
        }

        let mut table = Builder::from(timer_data.clone()).build();
        table.with(Style::modern_rounded());
        info!("\n \n TIMER DATA \n \n {}", table.to_string());
        timer_data
    }
}

impl Default for SumsTimer {
    fn default() -> Self {
        SumsTimer::new()
    }
}
