//! Release version ordering
//!
//! Index files carry free-form version strings. Most are semver
//! (`4.9.2-atmel3.5.4-arduino2`), some are shortened (`1.6`) and a few are
//! not versions at all. Picking "the latest" needs a total order over all of
//! them, so this module defines one:
//!
//! - two parseable versions compare by semver precedence, ties broken by the
//!   raw string (so `1.0.0+a` and `1.0.0+b` never compare equal)
//! - a parseable version ranks above an unparseable one
//! - two unparseable versions compare lexicographically

use semver::Version;
use std::cmp::Ordering;

/// Parse a release version leniently
///
/// Accepts full semver and pads shortened forms (`1`, `1.2`) with zeros.
/// Returns `None` when the string isn't a version.
pub fn parse_release_version(version: &str) -> Option<Version> {
    let trimmed = version.trim();
    if let Ok(parsed) = Version::parse(trimmed) {
        return Some(parsed);
    }

    // Split off pre-release/build suffix before padding the numeric core
    let suffix_at = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(suffix_at);
    let components = core.split('.').count();
    if core.is_empty() || components >= 3 {
        return None;
    }

    let padded = match components {
        1 => format!("{core}.0.0{suffix}"),
        _ => format!("{core}.0{suffix}"),
    };
    Version::parse(&padded).ok()
}

/// Compare two release version strings under the total order described in
/// the module docs
pub fn compare_release_versions(v1: &str, v2: &str) -> Ordering {
    match (parse_release_version(v1), parse_release_version(v2)) {
        (Some(a), Some(b)) => a.cmp(&b).then_with(|| v1.cmp(v2)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => v1.cmp(v2),
    }
}

/// Check if version v1 is newer than v2
pub fn is_newer(v1: &str, v2: &str) -> bool {
    compare_release_versions(v1, v2) == Ordering::Greater
}

/// Return the latest version of the given iterator, or `None` if it is empty
pub fn latest<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    versions
        .into_iter()
        .max_by(|a, b| compare_release_versions(a, b))
}
