// crates/docs_tag/src/lib.rs

//! The annotation-tag marker shared throughout the docs tool-chain.

/// Prefix common to every annotation tag in the tutorial sources,
/// e.g. `XR_DOCS_TAG_BEGIN_CreateInstance`.
pub const XR_DOCS_TAG: &str = "XR_DOCS_TAG_";

/// The marker set the command-line tool strips by default.
///
/// Owned so callers can extend or replace it; a line containing any entry
/// is removed from the stripped output.
pub fn default_markers() -> Vec<String> {
    vec![XR_DOCS_TAG.to_string()]
}
