//! Version normalization shared by every mod repository

use semver::Version;

/// Parse a version string into a semver::Version, padding partial versions.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2-beta" -> Version(1, 2, 0, pre: beta)
/// - "1.2.3" -> Version(1, 2, 3)
pub fn parse_version(version: &str) -> Option<Version> {
    let (core, suffix) = split_suffix(version);
    let parts: Vec<&str> = core.split('.').collect();
    let padded = match parts.len() {
        1 => format!("{}.0.0{}", parts[0], suffix),
        2 => format!("{}.{}.0{}", parts[0], parts[1], suffix),
        _ => version.to_string(),
    };
    Version::parse(&padded).ok()
}

/// Normalize a free-form version string from an upstream site.
///
/// Strict semantic versions are returned as-is (trimmed). Anything else is
/// cleaned up: leading non-numeric text like `v` or `version ` is dropped,
/// empty dot groups collapse, and trailing zero groups past the third are
/// removed. If the cleaned value still isn't a sortable version, the trimmed
/// input is returned unchanged.
///
/// Examples:
/// - "v1.2" -> "1.2"
/// - "1.2.0.0" -> "1.2.0"
/// - "1.2.3.4" -> "1.2.3.4" (not sortable, kept)
pub fn normalize_version(version: &str) -> String {
    let trimmed = version.trim();
    if Version::parse(trimmed).is_ok() {
        return trimmed.to_string();
    }

    match clean_version(trimmed) {
        Some(cleaned) if parse_version(&cleaned).is_some() => cleaned,
        _ => trimmed.to_string(),
    }
}

fn clean_version(version: &str) -> Option<String> {
    let version = version.trim_start_matches(|c: char| !c.is_ascii_digit());
    let (core, suffix) = split_suffix(version);

    let mut groups: Vec<&str> = core.split('.').filter(|g| !g.is_empty()).collect();
    while groups.len() > 3 && groups.last().is_some_and(|g| g.bytes().all(|b| b == b'0')) {
        groups.pop();
    }
    if groups.is_empty() || groups.len() > 3 {
        return None;
    }

    Some(format!("{}{}", groups.join("."), suffix))
}

/// Split `1.2.3-beta+build` into the numeric core and the `-beta+build` suffix
fn split_suffix(version: &str) -> (&str, &str) {
    let end = version
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(version.len());
    version.split_at(end)
}
