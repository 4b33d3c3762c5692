use anyhow::anyhow;
use log::{debug, warn};

use crate::constants::{MSG_BRIGHTNESS_FAILED, MSG_BRIGHTNESS_NOT_INSTALLED};
use crate::models::{ReportError, ReportResult};
use crate::platform::BrightnessControl;
use crate::reporters::Reporter;

pub struct BrightnessReporter {
    control: Box<dyn BrightnessControl>,
    available: bool,
}

impl BrightnessReporter {
    /// `available` comes from the capability check done at startup
    pub fn new(control: Box<dyn BrightnessControl>, available: bool) -> Self {
        Self { control, available }
    }
}

impl Reporter for BrightnessReporter {
    type Reading = u32;

    fn name(&self) -> &'static str {
        "brightness"
    }

    fn collect(&mut self) -> ReportResult<u32> {
        if !self.available {
            return Err(ReportError::Unavailable);
        }

        debug!("Querying display brightness");
        let levels = self.control.brightness().map_err(|e| {
            warn!("Brightness query failed: {:#}", e);
            ReportError::Failed(e)
        })?;

        levels
            .first()
            .copied()
            .ok_or_else(|| ReportError::Failed(anyhow!("No displays reported a brightness level")))
    }

    fn describe(&self, result: &ReportResult<u32>) -> Vec<String> {
        match result {
            Ok(level) => vec![format!("Screen brightness is {} percent.", level)],
            Err(ReportError::Unavailable) => vec![MSG_BRIGHTNESS_NOT_INSTALLED.to_string()],
            Err(_) => vec![MSG_BRIGHTNESS_FAILED.to_string()],
        }
    }
}
