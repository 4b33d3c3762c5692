use log::{debug, warn};

use crate::constants::{MSG_BATTERY_LOW, MSG_BATTERY_UNAVAILABLE};
use crate::models::{BatteryReading, ReportError, ReportResult};
use crate::platform::BatterySensor;
use crate::reporters::Reporter;

pub struct BatteryReporter {
    sensor: Box<dyn BatterySensor>,
    low_threshold: u8,
}

impl BatteryReporter {
    pub fn new(sensor: Box<dyn BatterySensor>, low_threshold: u8) -> Self {
        Self {
            sensor,
            low_threshold,
        }
    }

    fn is_low(&self, reading: &BatteryReading) -> bool {
        reading.percent < self.low_threshold && !reading.plugged
    }
}

impl Reporter for BatteryReporter {
    type Reading = BatteryReading;

    fn name(&self) -> &'static str {
        "battery"
    }

    fn collect(&mut self) -> ReportResult<BatteryReading> {
        debug!("Querying battery sensor");
        match self.sensor.read() {
            Ok(Some(reading)) => Ok(reading),
            Ok(None) => Err(ReportError::Unavailable),
            Err(e) => {
                warn!("Battery query failed: {:#}", e);
                Err(ReportError::Failed(e))
            }
        }
    }

    fn describe(&self, result: &ReportResult<BatteryReading>) -> Vec<String> {
        match result {
            Ok(reading) => {
                let charging = if reading.plugged {
                    "and charging"
                } else {
                    "and not charging"
                };
                let mut lines = vec![format!(
                    "The battery is at {} percent {}.",
                    reading.percent, charging
                )];
                if self.is_low(reading) {
                    lines.push(MSG_BATTERY_LOW.to_string());
                }
                lines
            }
            Err(ReportError::Unavailable) => vec![MSG_BATTERY_UNAVAILABLE.to_string()],
            Err(e) => vec![format!("Error while checking battery status: {}", e)],
        }
    }
}
