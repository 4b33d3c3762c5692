use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;

use crate::constants::{BACKLIGHT_PATH, POWER_SUPPLY_PATH};
use crate::models::BatteryReading;
use crate::platform::common::{checked_command_stdout, command_exists, CommandLister};
use crate::platform::{BatterySensor, BrightnessControl, VolumeControl};
use crate::reporters::network::ListingFormat;

lazy_static! {
    /// Matches the `[NN%]` level field in `amixer get` output
    static ref AMIXER_LEVEL: Regex = Regex::new(r"\[(\d{1,3})%\]").unwrap();
}

/// `iwgetid` prints `wlan0     ESSID:"HomeNet"`
pub const WIFI_LISTING_FORMAT: ListingFormat = ListingFormat {
    marker: "ESSID",
    excluded: None,
    strip_quotes: true,
};

pub fn wifi_lister() -> CommandLister {
    CommandLister::new("iwgetid", &[])
}

fn read_trimmed(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read {}", path.display()))?;
    Ok(content.trim().to_string())
}

/// Sorted entries of a sysfs class directory
fn class_entries(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(root)
        .context(format!("Failed to list {}", root.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();
    Ok(entries)
}

/// Battery state from `/sys/class/power_supply`
pub struct SysfsBattery {
    root: PathBuf,
}

impl SysfsBattery {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for SysfsBattery {
    fn default() -> Self {
        Self::with_root(POWER_SUPPLY_PATH)
    }
}

impl BatterySensor for SysfsBattery {
    fn read(&self) -> Result<Option<BatteryReading>> {
        if !self.root.exists() {
            debug!("{} does not exist", self.root.display());
            return Ok(None);
        }

        let mut battery = None;
        let mut mains_online = None;

        for supply in class_entries(&self.root)? {
            let supply_type = match read_trimmed(&supply.join("type")) {
                Ok(t) => t,
                Err(_) => continue,
            };

            match supply_type.as_str() {
                "Battery" if battery.is_none() => {
                    // Peripheral batteries (mice, headsets) report scope Device
                    if read_trimmed(&supply.join("scope")).map_or(false, |s| s == "Device") {
                        continue;
                    }
                    if supply.join("capacity").exists() {
                        battery = Some(supply);
                    }
                }
                "Mains" | "USB" => {
                    if let Ok(online) = read_trimmed(&supply.join("online")) {
                        let online = online == "1";
                        mains_online = Some(mains_online.unwrap_or(false) || online);
                    }
                }
                _ => {}
            }
        }

        let battery = match battery {
            Some(path) => path,
            None => return Ok(None),
        };

        let capacity: u8 = read_trimmed(&battery.join("capacity"))?
            .parse()
            .context("Battery capacity is not a number")?;

        // Without an AC adapter entry fall back to the battery's own status
        let plugged = match mains_online {
            Some(online) => online,
            None => read_trimmed(&battery.join("status"))
                .map(|status| status != "Discharging")
                .unwrap_or(false),
        };

        Ok(Some(BatteryReading {
            percent: capacity.min(100),
            plugged,
        }))
    }
}

/// Display brightness from `/sys/class/backlight`
pub struct SysfsBacklight {
    root: PathBuf,
}

impl SysfsBacklight {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for SysfsBacklight {
    fn default() -> Self {
        Self::with_root(BACKLIGHT_PATH)
    }
}

impl BrightnessControl for SysfsBacklight {
    fn is_available(&self) -> bool {
        class_entries(&self.root)
            .map(|entries| !entries.is_empty())
            .unwrap_or(false)
    }

    fn brightness(&self) -> Result<Vec<u32>> {
        let mut levels = Vec::new();

        for device in class_entries(&self.root)? {
            let current: f64 = read_trimmed(&device.join("brightness"))?
                .parse()
                .context("Brightness is not a number")?;
            let max: f64 = read_trimmed(&device.join("max_brightness"))?
                .parse()
                .context("Maximum brightness is not a number")?;

            if max <= 0.0 {
                return Err(anyhow!("{} reports a maximum brightness of zero", device.display()));
            }
            levels.push((current / max * 100.0).round() as u32);
        }

        Ok(levels)
    }
}

/// Master volume through ALSA's `amixer`
pub struct AmixerVolume {
    available: bool,
}

impl AmixerVolume {
    pub fn new() -> Self {
        let available = command_exists("amixer");
        if !available {
            info!("amixer not found - volume reporting disabled");
        }
        Self { available }
    }
}

impl VolumeControl for AmixerVolume {
    fn is_available(&self) -> bool {
        self.available
    }

    fn volume(&self) -> Result<u32> {
        let output = checked_command_stdout("amixer", &["get", "Master"])?;
        parse_amixer_volume(&output).ok_or_else(|| anyhow!("No volume level in amixer output"))
    }
}

/// First `[NN%]` field of `amixer get` output
pub fn parse_amixer_volume(output: &str) -> Option<u32> {
    AMIXER_LEVEL
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
