use super::HostIntel;
use crate::cache::WhoisFields;
use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// A single IP address and the enrichment gathered for it.
///
/// A [`Host`](super::Host) owns one or more of these; the record itself
/// carries no domain identity (composition, not inheritance).
#[derive(Debug, Clone)]
pub struct IpRecord {
    /// The address itself
    pub address: IpAddr,

    /// Resolved PTR names, trailing dot stripped
    pub reverse_names: Vec<String>,

    /// Network block this address belongs to, once whois is resolved
    pub cidr: Option<IpNetwork>,

    /// Flattened whois registration record for the containing block
    pub whois: Option<WhoisFields>,

    /// Service-intelligence lookup result, if a key was configured
    pub intel: Option<HostIntel>,
}

impl IpRecord {
    /// Create an unenriched record for an address
    #[must_use]
    pub const fn new(address: IpAddr) -> Self {
        Self {
            address,
            reverse_names: Vec::new(),
            cidr: None,
            whois: None,
            intel: None,
        }
    }

    /// Returns true if at least one PTR name was resolved
    #[must_use]
    pub fn has_reverse_names(&self) -> bool {
        !self.reverse_names.is_empty()
    }
}

impl From<IpAddr> for IpRecord {
    fn from(address: IpAddr) -> Self {
        Self::new(address)
    }
}

impl PartialEq for IpRecord {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for IpRecord {}

impl std::fmt::Display for IpRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_address_only() {
        let mut a = IpRecord::new("192.0.2.1".parse().unwrap());
        let b = IpRecord::new("192.0.2.1".parse().unwrap());
        a.reverse_names.push("host.example.com".to_string());
        assert_eq!(a, b);
    }
}
