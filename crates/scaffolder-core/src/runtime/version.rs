//! Version comparison for the installed SDK against the supported minimum

use anyhow::Result;
use semver::Version;

/// Compare the installed SDK version against the minimum a product supports.
/// Returns a warning message if the SDK is older than expected.
pub fn check_minimum(
    installed: &str,
    minimum: &str,
    display_name: &str,
    download_url: &str,
) -> Option<String> {
    let installed_ver = match parse_version(installed) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    let minimum_ver = match parse_version(minimum) {
        Ok(v) => v,
        Err(_) => return None, // Can't compare, skip warning
    };

    // Compare release numbers only, so 9.0.100-rc.1 still counts as 9.x
    let installed_release = Version::new(
        installed_ver.major,
        installed_ver.minor,
        installed_ver.patch,
    );

    if installed_release < minimum_ver {
        Some(format!(
            "Warning: {} {} or newer is required.\n\
             You are running version {}.\n\
             Download it from: {}",
            display_name, minimum, installed, download_url
        ))
    } else {
        None
    }
}

/// Parse version string, handling various formats.
///
/// Accepts a leading `v` and pads two-part versions (`9.0`) to full semver.
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);

    let padded = match cleaned.split(['-', '+']).next() {
        Some(core) if core.split('.').count() == 2 => {
            format!("{}.0{}", core, &cleaned[core.len()..])
        }
        _ => cleaned.to_string(),
    };

    Version::parse(&padded)
        .map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
