use crate::cache::WhoisFields;
use ipnetwork::IpNetwork;
use std::collections::BTreeMap;

/// Keys that mark a paragraph of whois output as a network block.
const NET_KEYS: [&str; 5] = ["cidr", "inetnum", "inet6num", "netrange", "route"];

/// Keys that may carry the block's CIDR in registry output.
const CIDR_KEYS: [&str; 3] = ["cidr", "route", "inet6num"];

/// One network block from an IP whois response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetBlock {
    /// `key -> value` pairs for this block, keys lowercased
    pub fields: BTreeMap<String, String>,
}

/// Structured IP whois response: registry output is semi-structured, so
/// it is kept as an explicit mapping with nested network blocks rather
/// than an open-ended dynamic object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpWhois {
    /// Network-block sub-records, outermost first
    pub nets: Vec<NetBlock>,

    /// Top-level fields not tied to a specific block
    pub fields: BTreeMap<String, String>,
}

impl IpWhois {
    /// Parse raw registry text into blocks and top-level fields.
    ///
    /// Paragraphs are separated by blank lines; a paragraph containing a
    /// network key (`cidr`, `inetnum`, `netrange`, ...) becomes a net
    /// block, everything else merges into the top-level fields. Comment
    /// lines (`%`, `#`) are skipped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut result = Self::default();

        for paragraph in raw.split("\n\n") {
            let mut fields = BTreeMap::new();
            for line in paragraph.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once(':') {
                    let key = key.trim().to_lowercase().replace(' ', "_");
                    let value = value.trim();
                    if key.is_empty() || value.is_empty() {
                        continue;
                    }
                    insert_field(&mut fields, &key, value);
                }
            }

            if fields.is_empty() {
                continue;
            }

            if NET_KEYS.iter().any(|k| fields.contains_key(*k)) {
                result.nets.push(NetBlock { fields });
            } else {
                for (key, value) in fields {
                    insert_field(&mut result.fields, &key, &value);
                }
            }
        }

        result
    }

    /// Flatten into `field -> value` plus `net{N}_{field} -> value`
    /// pairs. Embedded newlines become ", "; empty values are omitted,
    /// never stored.
    #[must_use]
    pub fn flatten(&self) -> WhoisFields {
        let mut flat = WhoisFields::new();

        for (key, value) in &self.fields {
            if !value.is_empty() {
                flat.insert(key.clone(), value.replace('\n', ", "));
            }
        }

        for (index, net) in self.nets.iter().enumerate() {
            for (key, value) in &net.fields {
                if !value.is_empty() {
                    flat.insert(format!("net{index}_{key}"), value.replace('\n', ", "));
                }
            }
        }

        flat
    }

    /// The primary CIDR of the outermost network block, if one parses.
    ///
    /// Registries sometimes list several blocks in one field
    /// (`"10.0.0.0/8, 10.16.0.0/12"`); the first parseable entry wins.
    #[must_use]
    pub fn primary_cidr(&self) -> Option<IpNetwork> {
        let net = self.nets.first()?;
        for key in CIDR_KEYS {
            if let Some(value) = net.fields.get(key) {
                for candidate in value.split(',') {
                    if let Ok(cidr) = candidate.trim().parse::<IpNetwork>() {
                        return Some(cidr);
                    }
                }
            }
        }
        None
    }

    /// Returns true if parsing produced nothing usable
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nets.is_empty() && self.fields.is_empty()
    }
}

/// Insert a field, appending with ", " when the key repeats.
fn insert_field(fields: &mut BTreeMap<String, String>, key: &str, value: &str) {
    fields
        .entry(key.to_string())
        .and_modify(|existing| {
            existing.push_str(", ");
            existing.push_str(value);
        })
        .or_insert_with(|| value.to_string());
}
