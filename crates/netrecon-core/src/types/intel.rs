use serde::{Deserialize, Serialize};

/// Service-intelligence lookup result for a single IP.
///
/// Mirrors the host endpoint of the Shodan-style API: organization, OS,
/// and one entry per observed service banner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HostIntel {
    /// IP address as reported by the service
    #[serde(default)]
    pub ip_str: Option<String>,

    /// Organization that owns the IP
    #[serde(default)]
    pub org: Option<String>,

    /// Operating system, if fingerprinted
    #[serde(default)]
    pub os: Option<String>,

    /// Observed services
    #[serde(default, rename = "data")]
    pub services: Vec<ServiceBanner>,
}

impl HostIntel {
    /// Returns true if the lookup produced no service entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Open ports observed for this host
    #[must_use]
    pub fn ports(&self) -> Vec<u16> {
        self.services.iter().map(|s| s.port).collect()
    }
}

/// A single `{port, banner}` observation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceBanner {
    /// Port number
    pub port: u16,

    /// Raw banner grabbed from the service
    #[serde(default, rename = "data")]
    pub banner: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_host_endpoint_shape() {
        let json = r#"{
            "ip_str": "203.0.113.5",
            "org": "Example Org",
            "os": null,
            "data": [
                {"port": 22, "data": "SSH-2.0-OpenSSH_9.6"},
                {"port": 443, "data": ""}
            ]
        }"#;

        let intel: HostIntel = serde_json::from_str(json).unwrap();
        assert_eq!(intel.org.as_deref(), Some("Example Org"));
        assert_eq!(intel.os, None);
        assert_eq!(intel.ports(), vec![22, 443]);
    }

    #[test]
    fn missing_fields_default() {
        let intel: HostIntel = serde_json::from_str("{}").unwrap();
        assert!(intel.is_empty());
        assert_eq!(intel.org, None);
    }
}
