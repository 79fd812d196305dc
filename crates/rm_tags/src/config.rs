// crates/rm_tags/src/config.rs

use docs_tag::default_markers;

/// Runtime policy for a single invocation.
///
/// The marker set and the usage-error exit code live here rather than as
/// constants at the call sites, so the containment predicate and the exit
/// policy can be exercised without spawning the process.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Lines containing any of these substrings are removed.
    pub markers: Vec<String>,
    /// Exit code used when no filepath was supplied. The tool soft-exits
    /// with 0 here, matching its long-standing command-line contract.
    pub usage_exit_code: i32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            usage_exit_code: 0,
        }
    }
}
