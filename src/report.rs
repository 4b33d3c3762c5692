//! The startup report sequence
//!
//! Runs every reporter once, in a fixed order, between the greeting and
//! the farewell. Each reporter's outcome is converted to lines here, so a
//! failing reporter only changes what is said, never whether the
//! remaining reporters run.

use log::{debug, info};

use crate::config::ReportConfig;
use crate::constants::{FAREWELL, GREETING};
use crate::platform::{Capabilities, Platform};
use crate::reporters::{
    BatteryReporter, BrightnessReporter, ClockReporter, IdentityReporter, NetworkReporter,
    PerformanceReporter, Reporter, VolumeReporter,
};
use crate::speech::OutputSink;

/// The reporters in speaking order
pub struct Reporters {
    pub clock: ClockReporter,
    pub battery: BatteryReporter,
    pub identity: IdentityReporter,
    pub network: NetworkReporter,
    pub brightness: BrightnessReporter,
    /// `None` when volume reporting is switched off in the config
    pub volume: Option<VolumeReporter>,
    pub performance: PerformanceReporter,
}

impl Reporters {
    /// Wire each reporter to its platform source
    pub fn from_platform(
        config: &ReportConfig,
        platform: Platform,
        capabilities: &Capabilities,
    ) -> Self {
        let volume = if config.report_volume {
            Some(VolumeReporter::new(platform.volume, capabilities.volume_control))
        } else {
            info!("Volume reporting disabled in configuration");
            None
        };

        Self {
            clock: ClockReporter::new(platform.clock),
            battery: BatteryReporter::new(platform.battery, config.low_battery_threshold),
            identity: IdentityReporter::new(platform.resolver),
            network: NetworkReporter::new(
                platform.probe,
                platform.interfaces,
                platform.listing_format,
            ),
            brightness: BrightnessReporter::new(
                platform.brightness,
                capabilities.brightness_control,
            ),
            volume,
            performance: PerformanceReporter::new(platform.sampler, config.cpu_sample_window()),
        }
    }
}

pub struct StartupReport<S: OutputSink> {
    sink: S,
    reporters: Reporters,
}

impl<S: OutputSink> StartupReport<S> {
    pub fn new(sink: S, reporters: Reporters) -> Self {
        Self { sink, reporters }
    }

    /// Speak the full report once
    pub fn run(&mut self) {
        info!("Starting startup report");
        self.sink.say(GREETING);

        speak_report(&mut self.sink, &mut self.reporters.clock);
        speak_report(&mut self.sink, &mut self.reporters.battery);
        speak_report(&mut self.sink, &mut self.reporters.identity);
        speak_report(&mut self.sink, &mut self.reporters.network);
        speak_report(&mut self.sink, &mut self.reporters.brightness);
        if let Some(volume) = self.reporters.volume.as_mut() {
            speak_report(&mut self.sink, volume);
        }
        speak_report(&mut self.sink, &mut self.reporters.performance);

        self.sink.say(FAREWELL);
        info!("Startup report completed");
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Query one reporter and speak whatever it has to say
fn speak_report<S: OutputSink, R: Reporter>(sink: &mut S, reporter: &mut R) {
    debug!("Running {} reporter", reporter.name());
    let result = reporter.collect();
    if let Err(e) = &result {
        debug!("{} reporter produced no reading: {}", reporter.name(), e);
    }
    for line in reporter.describe(&result) {
        sink.say(&line);
    }
}
