use anyhow::{anyhow, Result};
use log::{debug, warn};

use crate::constants::{MSG_NO_INTERNET, MSG_WIFI_NAME_FAILED, UNKNOWN_NETWORK};
use crate::models::{NetworkStatus, ReportResult};
use crate::platform::{ConnectivityProbe, InterfaceLister};
use crate::reporters::Reporter;

/// How to find the network name in an interface listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingFormat {
    /// Token that marks the name line
    pub marker: &'static str,
    /// Lines containing this token are skipped even if they hold the marker
    pub excluded: Option<&'static str>,
    /// Remove surrounding double quotes from the value
    pub strip_quotes: bool,
}

/// Extract the network name from colon-delimited listing output.
///
/// Takes the first line containing the marker but not the excluded token,
/// and returns everything after its first colon, trimmed. Falls back to
/// `Unknown Network` when no line matches. A matching line without a colon
/// is an error; later lines are not consulted.
pub fn parse_network_name(output: &str, format: &ListingFormat) -> Result<String> {
    if format.marker.is_empty() {
        return Ok(UNKNOWN_NETWORK.to_string());
    }

    let line = match output
        .lines()
        .filter(|line| line.contains(format.marker))
        .find(|line| format.excluded.map_or(true, |excluded| !line.contains(excluded)))
    {
        Some(line) => line,
        None => return Ok(UNKNOWN_NETWORK.to_string()),
    };

    let (_, value) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("No value separator in line: {}", line.trim()))?;

    let value = value.trim();
    if format.strip_quotes {
        Ok(value.trim_matches('"').to_string())
    } else {
        Ok(value.to_string())
    }
}

pub struct NetworkReporter {
    probe: Box<dyn ConnectivityProbe>,
    lister: Box<dyn InterfaceLister>,
    format: ListingFormat,
}

impl NetworkReporter {
    pub fn new(
        probe: Box<dyn ConnectivityProbe>,
        lister: Box<dyn InterfaceLister>,
        format: ListingFormat,
    ) -> Self {
        Self {
            probe,
            lister,
            format,
        }
    }
}

impl Reporter for NetworkReporter {
    type Reading = NetworkStatus;

    fn name(&self) -> &'static str {
        "network"
    }

    fn collect(&mut self) -> ReportResult<NetworkStatus> {
        debug!("Checking internet connectivity");
        if !self.probe.is_connected() {
            return Ok(NetworkStatus::Offline);
        }

        let network_name = match self
            .lister
            .list_interfaces()
            .and_then(|output| parse_network_name(&output, &self.format))
        {
            Ok(name) => Some(name),
            Err(e) => {
                warn!("Failed to fetch Wi-Fi name: {:#}", e);
                None
            }
        };

        Ok(NetworkStatus::Connected { network_name })
    }

    fn describe(&self, result: &ReportResult<NetworkStatus>) -> Vec<String> {
        match result {
            Ok(NetworkStatus::Offline) => vec![MSG_NO_INTERNET.to_string()],
            Ok(NetworkStatus::Connected {
                network_name: Some(name),
            }) => vec![format!("Connected to Wi-Fi network named {}.", name)],
            Ok(NetworkStatus::Connected { network_name: None }) | Err(_) => {
                vec![MSG_WIFI_NAME_FAILED.to_string()]
            }
        }
    }
}
