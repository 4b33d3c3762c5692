//! Platform data sources
//!
//! Every reporter reads through one of the traits below so the report can
//! be driven by fakes in tests. The OS-specific implementations live in
//! the `linux`, `macos` and `windows` submodules; [`Platform::current`]
//! picks the right set for the running system.

pub mod common;
pub mod linux;
pub mod macos;
pub mod windows;

use std::net::IpAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDateTime;
use log::info;

#[cfg(test)]
use mockall::automock;

use crate::config::ReportConfig;
use crate::models::BatteryReading;
use crate::reporters::network::ListingFormat;

/// Source of the local wall-clock time
#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Power-supply sensor. `Ok(None)` means the machine has no battery.
#[cfg_attr(test, automock)]
pub trait BatterySensor {
    fn read(&self) -> Result<Option<BatteryReading>>;
}

#[cfg_attr(test, automock)]
pub trait HostResolver {
    fn hostname(&self) -> Result<String>;
    fn resolve(&self, hostname: &str) -> Result<Option<IpAddr>>;
}

#[cfg_attr(test, automock)]
pub trait ConnectivityProbe {
    /// One connection attempt, no retry
    fn is_connected(&self) -> bool;
}

/// Runs the OS command that lists wireless interface details
#[cfg_attr(test, automock)]
pub trait InterfaceLister {
    fn list_interfaces(&self) -> Result<String>;
}

#[cfg_attr(test, automock)]
pub trait BrightnessControl {
    fn is_available(&self) -> bool;
    /// Brightness per display in percent, primary display first
    fn brightness(&self) -> Result<Vec<u32>>;
}

#[cfg_attr(test, automock)]
pub trait VolumeControl {
    fn is_available(&self) -> bool;
    /// Master output volume in percent
    fn volume(&self) -> Result<u32>;
}

#[cfg_attr(test, automock)]
pub trait PerformanceSampler {
    /// Blocks for `window` while measuring
    fn cpu_percent(&mut self, window: Duration) -> Result<f32>;
    fn memory_percent(&mut self) -> Result<f32>;
}

/// The full set of data sources for one machine
pub struct Platform {
    pub clock: Box<dyn Clock>,
    pub battery: Box<dyn BatterySensor>,
    pub resolver: Box<dyn HostResolver>,
    pub probe: Box<dyn ConnectivityProbe>,
    pub interfaces: Box<dyn InterfaceLister>,
    pub listing_format: ListingFormat,
    pub brightness: Box<dyn BrightnessControl>,
    pub volume: Box<dyn VolumeControl>,
    pub sampler: Box<dyn PerformanceSampler>,
}

impl Platform {
    /// Build the data sources for the running operating system
    pub fn current(config: &ReportConfig) -> Result<Self> {
        let probe = common::TcpConnectivityProbe::new(
            config.connectivity.socket_addr()?,
            config.connectivity.timeout(),
        );

        #[cfg(target_os = "windows")]
        {
            info!("Using Windows data sources");
            Ok(Self {
                clock: Box::new(common::SystemClock),
                battery: Box::new(windows::PowerStatusBattery),
                resolver: Box::new(common::DnsHostResolver),
                probe: Box::new(probe),
                interfaces: Box::new(windows::wifi_lister()),
                listing_format: windows::WIFI_LISTING_FORMAT,
                brightness: Box::new(windows::WmiBrightness::new()),
                volume: Box::new(windows::EndpointVolume::new()),
                sampler: Box::new(common::SysinfoSampler::new()),
            })
        }
        #[cfg(target_os = "linux")]
        {
            info!("Using Linux data sources");
            Ok(Self {
                clock: Box::new(common::SystemClock),
                battery: Box::new(linux::SysfsBattery::default()),
                resolver: Box::new(common::DnsHostResolver),
                probe: Box::new(probe),
                interfaces: Box::new(linux::wifi_lister()),
                listing_format: linux::WIFI_LISTING_FORMAT,
                brightness: Box::new(linux::SysfsBacklight::default()),
                volume: Box::new(linux::AmixerVolume::new()),
                sampler: Box::new(common::SysinfoSampler::new()),
            })
        }
        #[cfg(target_os = "macos")]
        {
            info!("Using macOS data sources");
            Ok(Self {
                clock: Box::new(common::SystemClock),
                battery: Box::new(macos::PmsetBattery),
                resolver: Box::new(common::DnsHostResolver),
                probe: Box::new(probe),
                interfaces: Box::new(macos::wifi_lister()),
                listing_format: macos::WIFI_LISTING_FORMAT,
                brightness: Box::new(macos::BrightnessCli::new()),
                volume: Box::new(macos::OsascriptVolume::new()),
                sampler: Box::new(common::SysinfoSampler::new()),
            })
        }
        #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
        {
            info!("Using generic data sources for unsupported platform");
            Ok(Self {
                clock: Box::new(common::SystemClock),
                battery: Box::new(common::Unsupported),
                resolver: Box::new(common::DnsHostResolver),
                probe: Box::new(probe),
                interfaces: Box::new(common::Unsupported),
                listing_format: ListingFormat::default(),
                brightness: Box::new(common::Unsupported),
                volume: Box::new(common::Unsupported),
                sampler: Box::new(common::SysinfoSampler::new()),
            })
        }
    }
}

/// Optional features detected once during setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub brightness_control: bool,
    pub volume_control: bool,
    pub speech_synthesis: bool,
}

impl Capabilities {
    pub fn detect(platform: &Platform, speech_synthesis: bool) -> Self {
        let capabilities = Self {
            brightness_control: platform.brightness.is_available(),
            volume_control: platform.volume.is_available(),
            speech_synthesis,
        };
        info!("Detected capabilities: {:?}", capabilities);
        capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fakes;

    #[test]
    fn test_detect_all_present() {
        let platform = fakes::healthy_platform();
        let capabilities = Capabilities::detect(&platform, false);
        assert_eq!(
            capabilities,
            Capabilities {
                brightness_control: true,
                volume_control: true,
                speech_synthesis: false,
            }
        );
    }

    #[test]
    fn test_detect_missing_controls() {
        let mut platform = fakes::healthy_platform();
        platform.brightness = Box::new(common::Unsupported);
        platform.volume = Box::new(common::Unsupported);

        let capabilities = Capabilities::detect(&platform, true);
        assert!(!capabilities.brightness_control);
        assert!(!capabilities.volume_control);
        assert!(capabilities.speech_synthesis);
    }
}
