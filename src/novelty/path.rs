//! Rewrites warning file paths into repository-relative form.

use std::path::Path;

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Strip everything up to and including `root` (and the separator after it)
/// from `raw`. Paths that do not contain `root` come back unchanged.
///
/// Only matches that end on a path boundary count, so `/ws/proj` does not
/// match inside `/ws/project2/...`. When `root` occurs more than once the
/// last boundary match wins, which makes the rewrite idempotent.
pub fn normalize(raw: &str, root: &str) -> String {
    let root = root.trim_end_matches(is_separator);
    match root_end(raw, root) {
        Some(end) => {
            let rest = &raw[end..];
            rest.strip_prefix(is_separator).unwrap_or(rest).to_string()
        }
        None => raw.to_string(),
    }
}

fn root_end(raw: &str, root: &str) -> Option<usize> {
    if root.is_empty() || root.len() > raw.len() {
        return None;
    }
    (0..=raw.len() - root.len())
        .rev()
        .filter(|&i| raw.is_char_boundary(i))
        .find(|&i| {
            if !raw[i..].starts_with(root) {
                return false;
            }
            let rest = &raw[i + root.len()..];
            rest.is_empty() || rest.starts_with(is_separator)
        })
        .map(|i| i + root.len())
}

/// The token annotations are matched against for a build's workspace: its
/// absolute path, or just the directory name when the workspace cannot be
/// resolved on this machine.
///
/// Symlinks are kept as they are. Analyzers report paths through the
/// workspace as the build saw it, so a resolved link target would never
/// match.
pub fn workspace_root(workspace: &Path) -> String {
    match std::path::absolute(workspace) {
        Ok(abs) if abs.exists() => abs.display().to_string(),
        Ok(abs) => {
            tracing::debug!(
                workspace = %abs.display(),
                "workspace not present, matching on its name"
            );
            bare_name(workspace)
        }
        Err(err) => {
            tracing::debug!(
                workspace = %workspace.display(),
                error = %err,
                "workspace not resolvable, matching on its name"
            );
            bare_name(workspace)
        }
    }
}

fn bare_name(workspace: &Path) -> String {
    workspace
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| workspace.display().to_string())
}

#[cfg(test)]
#[path = "path_test.rs"]
mod tests;
