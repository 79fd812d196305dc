// crates/strip_tags/src/lib.rs

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Returns `true` if any marker substring occurs anywhere in `line`.
///
/// Matching is plain case-sensitive containment: markers are literal text,
/// never patterns, and may match at any position in the line.
pub fn line_contains_marker(line: &str, markers: &[String]) -> bool {
    markers.iter().any(|marker| line.contains(marker.as_str()))
}

/// Filters `content`, dropping every line that contains one of the marker
/// substrings.
///
/// Lines are split inclusive of their terminators, so retained lines are
/// copied byte-for-byte (`\r\n` endings and a missing final newline both
/// survive). With an empty marker set the result equals `content`.
pub fn strip_tag_lines(content: &str, markers: &[String]) -> String {
    content
        .split_inclusive('\n')
        .filter(|line| !line_contains_marker(line, markers))
        .collect()
}

/// Rewrites the file at `path` in place, keeping only the lines that contain
/// none of the marker substrings.
///
/// The filtered content is staged in a sibling `<path>.tmp` file (created
/// fresh, truncating any stale leftover), then the original is deleted and
/// the temporary renamed onto its path. The replacement is not crash-atomic:
/// should the rename fail after the delete, only the `.tmp` file survives.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the temporary cannot be
/// created or written, or the delete/rename steps fail. Every failure is
/// fatal; no cleanup of a partially written temporary is attempted.
pub fn strip_tags_in_file<P: AsRef<Path>>(path: P, markers: &[String]) -> Result<()> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    let filtered = strip_tag_lines(&content, markers);

    let tmp_path = temp_path_for(path);
    {
        let mut tmp_file = File::create(&tmp_path)
            .with_context(|| format!("Error creating temporary file {}", tmp_path.display()))?;
        tmp_file
            .write_all(filtered.as_bytes())
            .with_context(|| format!("Error writing temporary file {}", tmp_path.display()))?;
    } // handle closed here, so the rename below observes the flushed content

    fs::remove_file(path).with_context(|| format!("Error removing file {}", path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Error renaming {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

/// Staging path for the rewrite: the original path with `.tmp` appended.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
