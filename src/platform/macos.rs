use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::info;
use regex::Regex;

use crate::models::BatteryReading;
use crate::platform::common::{checked_command_stdout, command_exists, CommandLister};
use crate::platform::{BatterySensor, BrightnessControl, VolumeControl};
use crate::reporters::network::ListingFormat;

lazy_static! {
    /// `-InternalBattery-0 (id=1234567)	95%; charging; 0:42 remaining present: true`
    static ref PMSET_PERCENT: Regex = Regex::new(r"(\d{1,3})%").unwrap();
    /// `display 0: brightness 0.750000`
    static ref DISPLAY_BRIGHTNESS: Regex =
        Regex::new(r"display \d+: brightness (\d+(?:\.\d+)?)").unwrap();
}

/// `networksetup -getairportnetwork` prints `Current Wi-Fi Network: HomeNet`
pub const WIFI_LISTING_FORMAT: ListingFormat = ListingFormat {
    marker: "Wi-Fi Network",
    excluded: None,
    strip_quotes: false,
};

pub fn wifi_lister() -> CommandLister {
    CommandLister::new("networksetup", &["-getairportnetwork", "en0"])
}

/// Battery state from `pmset -g batt`
pub struct PmsetBattery;

impl BatterySensor for PmsetBattery {
    fn read(&self) -> Result<Option<BatteryReading>> {
        let output = checked_command_stdout("pmset", &["-g", "batt"])?;
        parse_pmset(&output)
    }
}

/// Parse `pmset -g batt`. No `InternalBattery` line means no battery.
pub fn parse_pmset(output: &str) -> Result<Option<BatteryReading>> {
    let plugged = output
        .lines()
        .next()
        .map_or(false, |line| line.contains("AC Power"));

    let battery_line = match output.lines().find(|line| line.contains("InternalBattery")) {
        Some(line) => line,
        None => return Ok(None),
    };

    let percent: u8 = PMSET_PERCENT
        .captures(battery_line)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| anyhow!("No charge percentage in pmset output"))?
        .as_str()
        .parse()
        .context("Charge percentage is not a number")?;

    Ok(Some(BatteryReading {
        percent: percent.min(100),
        plugged,
    }))
}

/// Display brightness through the `brightness` command-line tool
pub struct BrightnessCli {
    available: bool,
}

impl BrightnessCli {
    pub fn new() -> Self {
        let available = command_exists("brightness");
        if !available {
            info!("brightness tool not found - brightness reporting disabled");
        }
        Self { available }
    }
}

impl BrightnessControl for BrightnessCli {
    fn is_available(&self) -> bool {
        self.available
    }

    fn brightness(&self) -> Result<Vec<u32>> {
        let output = checked_command_stdout("brightness", &["-l"])?;
        Ok(parse_brightness_list(&output))
    }
}

/// Per-display levels from `brightness -l`, scaled from 0..1 to percent
pub fn parse_brightness_list(output: &str) -> Vec<u32> {
    DISPLAY_BRIGHTNESS
        .captures_iter(output)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .map(|level| (level * 100.0).round() as u32)
        .collect()
}

/// Output volume through AppleScript
pub struct OsascriptVolume {
    available: bool,
}

impl OsascriptVolume {
    pub fn new() -> Self {
        Self {
            available: command_exists("osascript"),
        }
    }
}

impl VolumeControl for OsascriptVolume {
    fn is_available(&self) -> bool {
        self.available
    }

    fn volume(&self) -> Result<u32> {
        let output = checked_command_stdout(
            "osascript",
            &["-e", "output volume of (get volume settings)"],
        )?;
        output
            .trim()
            .parse()
            .context(format!("Unexpected osascript volume output: {}", output.trim()))
    }
}
