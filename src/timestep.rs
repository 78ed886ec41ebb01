use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Bookkeeping for one solver step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeStep {
    pub iteration: usize,
    pub time: f64,
    pub step: f64,
    /// Wall-clock time the step was recorded, in seconds since the Unix epoch.
    pub timestamp: f64,
    /// Name of the constraint that limited the step size, if any.
    pub constraint: Option<String>,
}

/*
 * Constructors
 */
impl TimeStep {
    pub fn new(iteration: usize, time: f64, step: f64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0., |elapsed| elapsed.as_secs_f64());
        TimeStep::at(iteration, time, step, timestamp)
    }

    pub fn at(iteration: usize, time: f64, step: f64, timestamp: f64) -> Self {
        TimeStep {
            iteration,
            time,
            step,
            timestamp,
            constraint: None,
        }
    }

    pub fn with_constraint(mut self, name: impl Into<String>) -> Self {
        self.constraint = Some(name.into());
        self
    }
}

/*
 * Comparison
 */
impl TimeStep {
    /// The step with the smaller step size; ties go to `a`.
    pub fn min_of_two<'a>(a: &'a TimeStep, b: &'a TimeStep) -> &'a TimeStep {
        if b.step < a.step {
            b
        } else {
            a
        }
    }

    pub fn min_of_three<'a>(a: &'a TimeStep, b: &'a TimeStep, c: &'a TimeStep) -> &'a TimeStep {
        TimeStep::min_of_two(TimeStep::min_of_two(a, b), c)
    }
}

/*
 * Text output
 */
impl TimeStep {
    pub fn header(with_name: bool) -> String {
        let mut header = String::from("iteration\ttime\ttimestep\twallclock");
        if with_name {
            header.push_str("\tconstraint");
        }
        header
    }

    pub fn to_row(&self, with_name: bool) -> String {
        let mut row = format!(
            "{}\t{}\t{}\t{}",
            self.iteration, self.time, self.step, self.timestamp
        );
        if with_name {
            row.push('\t');
            row.push_str(self.constraint.as_deref().unwrap_or(""));
        }
        row
    }
}
