// crates/release_tag/src/lib.rs

//! Release-tag handling for the tutorial site build.
//!
//! The documentation build stamps every rendered page with the release tag
//! it was built from and links example archives by that tag. The tag arrives
//! through the `OPENXR_TUTORIALS_GIT_TAG` environment variable, sometimes
//! wrapped in shell quoting; this crate normalizes it and builds the link
//! strings the page templates interpolate.

use std::env;

/// Environment variable carrying the tutorial release tag.
pub const RELEASE_TAG_VAR: &str = "OPENXR_TUTORIALS_GIT_TAG";

/// Tag used when the environment does not provide one.
pub const DEFAULT_RELEASE_TAG: &str = "v0.0.0";

/// Normalizes a raw release-tag value.
///
/// Surrounding double-quote characters (as injected by some CI shells) are
/// stripped; `None` falls back to [`DEFAULT_RELEASE_TAG`].
pub fn resolve_release_tag(raw: Option<&str>) -> String {
    match raw {
        Some(value) => value.trim_matches('"').to_string(),
        None => DEFAULT_RELEASE_TAG.to_string(),
    }
}

/// Reads and normalizes the release tag from the process environment.
pub fn release_tag_from_env() -> String {
    resolve_release_tag(env::var(RELEASE_TAG_VAR).ok().as_deref())
}

/// Khronos registry manual page for an OpenXR symbol,
/// e.g. `xrCreateInstance`.
pub fn openxr_ref_url(symbol: &str) -> String {
    format!(
        "https://registry.khronos.org/OpenXR/specs/1.0/man/html/{}.html",
        symbol
    )
}

/// Download URL for a file published under a tagged GitHub release.
pub fn release_url(tag: &str, path: &str) -> String {
    format!(
        "https://github.com/KhronosGroup/OpenXR-Tutorials/releases/tag/{}/{}",
        tag, path
    )
}

/// Footer line appended to every rendered page.
pub fn version_epilog(tag: &str) -> String {
    format!("Version: {}", tag)
}

/// reStructuredText substitution prepended to every page source.
pub fn tag_substitution_prolog(tag: &str) -> String {
    format!(".. |openxr_tutorials_git_tag| replace:: {}", tag)
}
