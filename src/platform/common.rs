use std::net::{IpAddr, SocketAddr, TcpStream, ToSocketAddrs};
use std::process::Command;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDateTime};
use log::{debug, warn};
use sysinfo::{CpuExt, CpuRefreshKind, RefreshKind, System, SystemExt};

use crate::models::BatteryReading;
use crate::platform::{
    BatterySensor, BrightnessControl, Clock, ConnectivityProbe, HostResolver, InterfaceLister,
    PerformanceSampler, VolumeControl,
};

/// Check whether a program can be found on the search path
pub fn command_exists(program: &str) -> bool {
    let locator = if cfg!(windows) { "where" } else { "which" };

    Command::new(locator)
        .arg(program)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Run a command and return its stdout, regardless of exit status.
///
/// Only a failure to start the process is an error.
pub fn command_stdout(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .context(format!("Failed to execute {}", program))?;

    if !output.status.success() {
        debug!(
            "{} exited with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Run a command and return its stdout, failing on a non-zero exit status
pub fn checked_command_stdout(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .context(format!("Failed to execute {}", program))?;

    if !output.status.success() {
        return Err(anyhow!(
            "{} failed with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Local wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Resolves the hostname through the system resolver
pub struct DnsHostResolver;

impl HostResolver for DnsHostResolver {
    fn hostname(&self) -> Result<String> {
        let hostname = hostname::get()
            .map_err(|e| anyhow!("Failed to get hostname: {}", e))?
            .to_string_lossy()
            .to_string();
        Ok(hostname)
    }

    fn resolve(&self, hostname: &str) -> Result<Option<IpAddr>> {
        let addrs: Vec<IpAddr> = (hostname, 0)
            .to_socket_addrs()
            .context(format!("Failed to resolve {}", hostname))?
            .map(|addr| addr.ip())
            .collect();

        Ok(addrs
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| addrs.first())
            .copied())
    }
}

/// Single outbound TCP connection attempt
pub struct TcpConnectivityProbe {
    address: SocketAddr,
    timeout: Duration,
}

impl TcpConnectivityProbe {
    pub fn new(address: SocketAddr, timeout: Duration) -> Self {
        Self { address, timeout }
    }
}

impl ConnectivityProbe for TcpConnectivityProbe {
    fn is_connected(&self) -> bool {
        debug!("Probing connectivity via {}", self.address);
        match TcpStream::connect_timeout(&self.address, self.timeout) {
            Ok(_) => true,
            Err(e) => {
                debug!("Connectivity probe failed: {}", e);
                false
            }
        }
    }
}

/// Runs a fixed command to list wireless interfaces
pub struct CommandLister {
    program: &'static str,
    args: &'static [&'static str],
}

impl CommandLister {
    pub fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

impl InterfaceLister for CommandLister {
    fn list_interfaces(&self) -> Result<String> {
        command_stdout(self.program, self.args)
    }
}

/// CPU and memory sampling backed by sysinfo
pub struct SysinfoSampler {
    system: System,
}

impl SysinfoSampler {
    pub fn new() -> Self {
        let system = System::new_with_specifics(
            RefreshKind::new()
                .with_cpu(CpuRefreshKind::new().with_cpu_usage())
                .with_memory(),
        );
        Self { system }
    }
}

impl Default for SysinfoSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl PerformanceSampler for SysinfoSampler {
    fn cpu_percent(&mut self, window: Duration) -> Result<f32> {
        self.system.refresh_cpu();
        thread::sleep(window);
        self.system.refresh_cpu();

        let usage = self.system.global_cpu_info().cpu_usage();
        if !usage.is_finite() {
            return Err(anyhow!("CPU usage sample is not a number"));
        }
        Ok(usage)
    }

    fn memory_percent(&mut self) -> Result<f32> {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        if total == 0 {
            return Err(anyhow!("Total memory reported as zero"));
        }
        let used = total.saturating_sub(self.system.available_memory());
        Ok((used as f64 / total as f64 * 100.0) as f32)
    }
}

/// Stand-in for sources the running platform does not provide
pub struct Unsupported;

impl BatterySensor for Unsupported {
    fn read(&self) -> Result<Option<BatteryReading>> {
        Ok(None)
    }
}

impl InterfaceLister for Unsupported {
    fn list_interfaces(&self) -> Result<String> {
        Err(anyhow!("No interface listing command on this platform"))
    }
}

impl BrightnessControl for Unsupported {
    fn is_available(&self) -> bool {
        false
    }

    fn brightness(&self) -> Result<Vec<u32>> {
        Err(anyhow!("Brightness control is not supported on this platform"))
    }
}

impl VolumeControl for Unsupported {
    fn is_available(&self) -> bool {
        false
    }

    fn volume(&self) -> Result<u32> {
        warn!("Volume queried on a platform without volume control");
        Err(anyhow!("Volume control is not supported on this platform"))
    }
}
