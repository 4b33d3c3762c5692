use std::fmt;
use std::net::IpAddr;

/// A single battery sensor reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    pub percent: u8,
    pub plugged: bool,
}

/// Hostname and, when resolvable, the address it maps to.
///
/// The address is resolved but not part of the spoken report.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemIdentity {
    pub hostname: String,
    pub ip_address: Option<IpAddr>,
}

/// Result of the two-phase network check
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkStatus {
    Offline,
    /// Connected; `None` when the interface listing could not be run
    Connected { network_name: Option<String> },
}

/// CPU and memory utilization, both in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSample {
    pub cpu_percent: f32,
    pub memory_percent: f32,
}

/// Why a reporter produced no reading
#[derive(Debug)]
pub enum ReportError {
    /// The capability or sensor does not exist on this machine
    Unavailable,
    /// The query was attempted and failed
    Failed(anyhow::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Unavailable => write!(f, "not available"),
            ReportError::Failed(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<anyhow::Error> for ReportError {
    fn from(e: anyhow::Error) -> Self {
        ReportError::Failed(e)
    }
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
