use log::{debug, warn};

use crate::constants::MSG_IDENTITY_FAILED;
use crate::models::{ReportError, ReportResult, SystemIdentity};
use crate::platform::HostResolver;
use crate::reporters::Reporter;

pub struct IdentityReporter {
    resolver: Box<dyn HostResolver>,
}

impl IdentityReporter {
    pub fn new(resolver: Box<dyn HostResolver>) -> Self {
        Self { resolver }
    }
}

impl Reporter for IdentityReporter {
    type Reading = SystemIdentity;

    fn name(&self) -> &'static str {
        "identity"
    }

    fn collect(&mut self) -> ReportResult<SystemIdentity> {
        debug!("Resolving hostname");
        let hostname = self.resolver.hostname().map_err(|e| {
            warn!("Hostname lookup failed: {:#}", e);
            ReportError::Failed(e)
        })?;

        // A hostname that does not resolve fails the whole identity check
        let ip_address = self.resolver.resolve(&hostname).map_err(|e| {
            warn!("Address lookup for {} failed: {:#}", hostname, e);
            ReportError::Failed(e)
        })?;
        debug!("{} resolves to {:?}", hostname, ip_address);

        Ok(SystemIdentity {
            hostname,
            ip_address,
        })
    }

    fn describe(&self, result: &ReportResult<SystemIdentity>) -> Vec<String> {
        match result {
            Ok(identity) => vec![format!("This system name is {}.", identity.hostname)],
            Err(_) => vec![MSG_IDENTITY_FAILED.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MockHostResolver;
    use anyhow::anyhow;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_hostname_spoken_address_kept() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_hostname()
            .return_once(|| Ok("workstation".to_string()));
        resolver
            .expect_resolve()
            .withf(|host| host == "workstation")
            .return_once(|_| Ok(Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20)))));

        let mut reporter = IdentityReporter::new(Box::new(resolver));
        let result = reporter.collect();

        let identity = result.as_ref().unwrap();
        assert_eq!(
            identity.ip_address,
            Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20)))
        );
        let lines = reporter.describe(&result);
        assert_eq!(lines, vec!["This system name is workstation."]);
        assert!(!lines[0].contains("192.168"));
    }

    #[test]
    fn test_hostname_failure() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_hostname()
            .return_once(|| Err(anyhow!("no hostname")));
        resolver.expect_resolve().never();

        let mut reporter = IdentityReporter::new(Box::new(resolver));
        let result = reporter.collect();
        assert_eq!(
            reporter.describe(&result),
            vec!["Unable to fetch system information at the moment."]
        );
    }

    #[test]
    fn test_resolution_failure() {
        let mut resolver = MockHostResolver::new();
        resolver
            .expect_hostname()
            .return_once(|| Ok("lonely".to_string()));
        resolver
            .expect_resolve()
            .return_once(|_| Err(anyhow!("name or service not known")));

        let mut reporter = IdentityReporter::new(Box::new(resolver));
        let result = reporter.collect();
        assert!(result.is_err());
        assert_eq!(
            reporter.describe(&result),
            vec!["Unable to fetch system information at the moment."]
        );
    }
}
