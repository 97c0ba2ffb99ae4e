//! DNS-name normalization and subdomain validation.
//!
//! Candidates coming back from the search source are raw URL fragments.
//! They are stripped down to bare hostnames here, then checked against
//! the target domain label-by-label. Comparing labels rather than raw
//! string suffixes keeps `evilexample.com` from matching `example.com`.

/// Maximum length of a single DNS label.
const MAX_LABEL_LEN: usize = 63;

/// Canonical form of a hostname: lowercased, trailing dot stripped.
#[must_use]
pub fn canonical(name: &str) -> String {
    name.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Strip a protocol scheme and path suffix from a raw URL-ish string.
///
/// Splits on `://` first, then on the first `/`. Query results are often
/// full URLs (`https://mail.example.com/login`); only the host matters.
#[must_use]
pub fn strip_scheme_and_path(raw: &str) -> &str {
    let rest = raw.split_once("://").map_or(raw, |(_, rest)| rest);
    rest.split('/').next().unwrap_or(rest)
}

/// Returns true if `name` is a syntactically valid hostname.
///
/// Leading underscores are allowed: service records such as
/// `_dmarc.example.com` are legitimate discovery results.
#[must_use]
pub fn is_valid_hostname(name: &str) -> bool {
    let name = canonical(name);
    if name.is_empty() {
        return false;
    }
    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= MAX_LABEL_LEN
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// Returns true if `candidate` is a strict DNS subdomain of `parent`.
///
/// The comparison is done on labels, not raw string suffixes, and the
/// parent itself is rejected (a domain is not its own subdomain).
/// Malformed candidates return false rather than erroring.
#[must_use]
pub fn is_strict_subdomain(candidate: &str, parent: &str) -> bool {
    let candidate = canonical(candidate);
    let parent = canonical(parent);

    if !is_valid_hostname(&candidate) || !is_valid_hostname(&parent) {
        return false;
    }

    let cand_labels: Vec<&str> = candidate.split('.').collect();
    let parent_labels: Vec<&str> = parent.split('.').collect();

    if cand_labels.len() <= parent_labels.len() {
        return false;
    }

    cand_labels[cand_labels.len() - parent_labels.len()..] == parent_labels[..]
}
