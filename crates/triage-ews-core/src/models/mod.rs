//! Domain models for the triage scoring engine.

mod assessment;
mod patient;
mod priority;
mod vitals;

pub use assessment::*;
pub use patient::*;
pub use priority::*;
pub use vitals::*;
