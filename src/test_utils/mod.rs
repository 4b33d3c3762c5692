//! Test utilities for startup-report
//!
//! Canned data sources that behave the same on every call, for tests
//! that need a whole report rather than one mocked method.

#![cfg(test)]

pub mod fakes {
    use std::net::{IpAddr, Ipv4Addr};
    use std::time::Duration;

    use anyhow::{anyhow, Result};
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::models::BatteryReading;
    use crate::platform::{
        BatterySensor, BrightnessControl, Clock, ConnectivityProbe, HostResolver,
        InterfaceLister, PerformanceSampler, Platform, VolumeControl,
    };
    use crate::reporters::network::ListingFormat;
    use crate::report::Reporters;
    use crate::reporters::{
        BatteryReporter, BrightnessReporter, ClockReporter, IdentityReporter, NetworkReporter,
        PerformanceReporter, VolumeReporter,
    };

    pub const NETSH_FORMAT: ListingFormat = ListingFormat {
        marker: "SSID",
        excluded: Some("BSSID"),
        strip_quotes: false,
    };

    pub fn fixed_instant() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|date| date.and_hms_opt(14, 30, 0))
            .expect("valid fixed instant")
    }

    pub struct FixedClock(pub NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    pub struct FixedBattery(pub Option<BatteryReading>);

    impl BatterySensor for FixedBattery {
        fn read(&self) -> Result<Option<BatteryReading>> {
            Ok(self.0)
        }
    }

    pub struct FixedResolver(pub &'static str);

    impl HostResolver for FixedResolver {
        fn hostname(&self) -> Result<String> {
            Ok(self.0.to_string())
        }

        fn resolve(&self, _hostname: &str) -> Result<Option<IpAddr>> {
            Ok(Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5))))
        }
    }

    pub struct FixedProbe(pub bool);

    impl ConnectivityProbe for FixedProbe {
        fn is_connected(&self) -> bool {
            self.0
        }
    }

    pub struct FixedListing(pub &'static str);

    impl InterfaceLister for FixedListing {
        fn list_interfaces(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    pub struct FixedBrightness(pub Vec<u32>);

    impl BrightnessControl for FixedBrightness {
        fn is_available(&self) -> bool {
            true
        }

        fn brightness(&self) -> Result<Vec<u32>> {
            Ok(self.0.clone())
        }
    }

    pub struct FixedVolume(pub u32);

    impl VolumeControl for FixedVolume {
        fn is_available(&self) -> bool {
            true
        }

        fn volume(&self) -> Result<u32> {
            Ok(self.0)
        }
    }

    pub struct FixedSampler {
        pub cpu: f32,
        pub memory: f32,
    }

    impl PerformanceSampler for FixedSampler {
        fn cpu_percent(&mut self, _window: Duration) -> Result<f32> {
            Ok(self.cpu)
        }

        fn memory_percent(&mut self) -> Result<f32> {
            Ok(self.memory)
        }
    }

    /// Every source fails or reports nothing
    pub struct Broken;

    impl BatterySensor for Broken {
        fn read(&self) -> Result<Option<BatteryReading>> {
            Err(anyhow!("sensor offline"))
        }
    }

    impl HostResolver for Broken {
        fn hostname(&self) -> Result<String> {
            Err(anyhow!("no hostname"))
        }

        fn resolve(&self, _hostname: &str) -> Result<Option<IpAddr>> {
            Err(anyhow!("no resolver"))
        }
    }

    impl ConnectivityProbe for Broken {
        fn is_connected(&self) -> bool {
            false
        }
    }

    impl InterfaceLister for Broken {
        fn list_interfaces(&self) -> Result<String> {
            Err(anyhow!("listing command missing"))
        }
    }

    impl BrightnessControl for Broken {
        fn is_available(&self) -> bool {
            false
        }

        fn brightness(&self) -> Result<Vec<u32>> {
            Err(anyhow!("no backlight"))
        }
    }

    impl VolumeControl for Broken {
        fn is_available(&self) -> bool {
            false
        }

        fn volume(&self) -> Result<u32> {
            Err(anyhow!("no mixer"))
        }
    }

    impl PerformanceSampler for Broken {
        fn cpu_percent(&mut self, _window: Duration) -> Result<f32> {
            Err(anyhow!("cpu stats unavailable"))
        }

        fn memory_percent(&mut self) -> Result<f32> {
            Err(anyhow!("memory stats unavailable"))
        }
    }

    pub const HOME_NET_LISTING: &str =
        "    BSSID                  : 8c:3b:ad:11:22:33\n    SSID                   : HomeNet\n";

    /// A platform where every source answers
    pub fn healthy_platform() -> Platform {
        Platform {
            clock: Box::new(FixedClock(fixed_instant())),
            battery: Box::new(FixedBattery(Some(BatteryReading {
                percent: 50,
                plugged: true,
            }))),
            resolver: Box::new(FixedResolver("test-host")),
            probe: Box::new(FixedProbe(true)),
            interfaces: Box::new(FixedListing(HOME_NET_LISTING)),
            listing_format: NETSH_FORMAT,
            brightness: Box::new(FixedBrightness(vec![42])),
            volume: Box::new(FixedVolume(35)),
            sampler: Box::new(FixedSampler {
                cpu: 37.26,
                memory: 81.0,
            }),
        }
    }

    pub fn healthy_reporters() -> Reporters {
        Reporters {
            clock: ClockReporter::new(Box::new(FixedClock(fixed_instant()))),
            battery: BatteryReporter::new(
                Box::new(FixedBattery(Some(BatteryReading {
                    percent: 50,
                    plugged: true,
                }))),
                20,
            ),
            identity: IdentityReporter::new(Box::new(FixedResolver("test-host"))),
            network: NetworkReporter::new(
                Box::new(FixedProbe(true)),
                Box::new(FixedListing(HOME_NET_LISTING)),
                NETSH_FORMAT,
            ),
            brightness: BrightnessReporter::new(Box::new(FixedBrightness(vec![42])), true),
            volume: Some(VolumeReporter::new(Box::new(FixedVolume(35)), true)),
            performance: PerformanceReporter::new(
                Box::new(FixedSampler {
                    cpu: 37.26,
                    memory: 81.0,
                }),
                Duration::from_millis(10),
            ),
        }
    }

    pub fn failing_reporters() -> Reporters {
        Reporters {
            clock: ClockReporter::new(Box::new(FixedClock(fixed_instant()))),
            battery: BatteryReporter::new(Box::new(Broken), 20),
            identity: IdentityReporter::new(Box::new(Broken)),
            network: NetworkReporter::new(Box::new(Broken), Box::new(Broken), NETSH_FORMAT),
            brightness: BrightnessReporter::new(Box::new(Broken), false),
            volume: Some(VolumeReporter::new(Box::new(Broken), false)),
            performance: PerformanceReporter::new(Box::new(Broken), Duration::from_millis(10)),
        }
    }
}
