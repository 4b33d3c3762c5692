use std::time::Duration;

use log::{debug, warn};

use crate::models::{PerformanceSample, ReportError, ReportResult};
use crate::platform::PerformanceSampler;
use crate::reporters::Reporter;

/// CPU and RAM utilization
pub struct PerformanceReporter {
    sampler: Box<dyn PerformanceSampler>,
    window: Duration,
}

impl PerformanceReporter {
    pub fn new(sampler: Box<dyn PerformanceSampler>, window: Duration) -> Self {
        Self { sampler, window }
    }
}

impl Reporter for PerformanceReporter {
    type Reading = PerformanceSample;

    fn name(&self) -> &'static str {
        "performance"
    }

    fn collect(&mut self) -> ReportResult<PerformanceSample> {
        debug!("Sampling CPU usage over {:?}", self.window);
        let sample = self
            .sampler
            .cpu_percent(self.window)
            .and_then(|cpu_percent| {
                let memory_percent = self.sampler.memory_percent()?;
                Ok(PerformanceSample {
                    cpu_percent,
                    memory_percent,
                })
            })
            .map_err(|e| {
                warn!("Performance sampling failed: {:#}", e);
                ReportError::Failed(e)
            })?;
        Ok(sample)
    }

    fn describe(&self, result: &ReportResult<PerformanceSample>) -> Vec<String> {
        match result {
            Ok(sample) => vec![
                format!("CPU usage is {:.1} percent.", sample.cpu_percent),
                format!("RAM usage is {:.1} percent.", sample.memory_percent),
            ],
            Err(e) => vec![format!("Error checking performance: {}", e)],
        }
    }
}
