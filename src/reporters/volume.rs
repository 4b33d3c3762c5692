use log::{debug, warn};

use crate::constants::{MSG_VOLUME_FAILED, MSG_VOLUME_NOT_INSTALLED};
use crate::models::{ReportError, ReportResult};
use crate::platform::VolumeControl;
use crate::reporters::Reporter;

/// Master output volume
pub struct VolumeReporter {
    control: Box<dyn VolumeControl>,
    available: bool,
}

impl VolumeReporter {
    pub fn new(control: Box<dyn VolumeControl>, available: bool) -> Self {
        Self { control, available }
    }
}

impl Reporter for VolumeReporter {
    type Reading = u32;

    fn name(&self) -> &'static str {
        "volume"
    }

    fn collect(&mut self) -> ReportResult<u32> {
        if !self.available {
            return Err(ReportError::Unavailable);
        }

        debug!("Querying output volume");
        self.control.volume().map_err(|e| {
            warn!("Volume query failed: {:#}", e);
            ReportError::Failed(e)
        })
    }

    fn describe(&self, result: &ReportResult<u32>) -> Vec<String> {
        match result {
            Ok(level) => vec![format!("System volume is {} percent.", level)],
            Err(ReportError::Unavailable) => vec![MSG_VOLUME_NOT_INSTALLED.to_string()],
            Err(_) => vec![MSG_VOLUME_FAILED.to_string()],
        }
    }
}
