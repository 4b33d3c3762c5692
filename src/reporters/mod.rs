//! Reporters
//!
//! A reporter queries one facet of the machine and turns the outcome into
//! the lines that get spoken. Querying and phrasing are separate steps so
//! a failed query still produces a fallback line instead of an error.

pub mod battery;
pub mod brightness;
pub mod clock;
pub mod identity;
pub mod network;
pub mod performance;
pub mod volume;

pub use battery::BatteryReporter;
pub use brightness::BrightnessReporter;
pub use clock::ClockReporter;
pub use identity::IdentityReporter;
pub use network::NetworkReporter;
pub use performance::PerformanceReporter;
pub use volume::VolumeReporter;

use crate::models::ReportResult;

pub trait Reporter {
    type Reading;

    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Query the underlying source once
    fn collect(&mut self) -> ReportResult<Self::Reading>;

    /// Lines to speak for a query outcome. Never empty.
    fn describe(&self, result: &ReportResult<Self::Reading>) -> Vec<String>;
}
