use chrono::NaiveDateTime;
use log::debug;

use crate::models::ReportResult;
use crate::platform::Clock;
use crate::reporters::Reporter;

pub struct ClockReporter {
    clock: Box<dyn Clock>,
}

impl ClockReporter {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl Reporter for ClockReporter {
    type Reading = NaiveDateTime;

    fn name(&self) -> &'static str {
        "clock"
    }

    fn collect(&mut self) -> ReportResult<NaiveDateTime> {
        debug!("Reading the system clock");
        Ok(self.clock.now())
    }

    fn describe(&self, result: &ReportResult<NaiveDateTime>) -> Vec<String> {
        match result {
            Ok(now) => vec![
                format!("The current time is {}", now.format("%I:%M %p")),
                format!("Today's date is {}", now.format("%B %d, %Y, %A")),
            ],
            Err(e) => vec![format!("Error while reading the clock: {}", e)],
        }
    }
}
