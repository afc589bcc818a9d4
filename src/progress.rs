// src/progress.rs
use crate::specs::occupancy::Reading;

/// Status reporting for a collector run.
/// Frontends implement this to surface what happened to the operator.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the page has been parsed.
    fn reading(&mut self, _reading: Reading) {}

    /// Called after the sample is committed.
    fn stored(&mut self, _id: i64) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stdout.
pub struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn reading(&mut self, reading: Reading) {
        match reading {
            Reading::Found(pct) => println!("Current occupancy: {pct}%"),
            Reading::Degraded => println!("No occupancy value found on the page; recording 0%"),
        }
    }
    fn stored(&mut self, id: i64) {
        println!("Saved sample #{id}");
    }
}
