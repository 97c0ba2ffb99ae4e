//! Strongly-typed representations of scan results.

mod host;
mod intel;
mod ip;
mod whois;

pub use host::{Host, HostKind};
pub use intel::{HostIntel, ServiceBanner};
pub use ip::IpRecord;
pub use whois::{IpWhois, NetBlock};
