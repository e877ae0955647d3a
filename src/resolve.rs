use std::fs::File;
use std::path::{Path, PathBuf};

use crate::directive::IncludeDirective;

/// Resolve a directive to an opened file and its concrete path.
///
/// Local includes try `context_dir/<name>` first, then each search directory
/// in order; system includes skip the context directory entirely. First
/// successful open wins. Returns `None` when no candidate opens — the caller
/// turns that into the unresolved-include diagnostic, since only it knows the
/// containing file and line.
pub(crate) fn resolve(
    directive: &IncludeDirective,
    context_dir: &Path,
    search_dirs: &[PathBuf],
) -> Option<(PathBuf, File)> {
    if let IncludeDirective::Local(name) = directive {
        if let Some(hit) = open_candidate(context_dir, name) {
            return Some(hit);
        }
    }

    let name = directive.filename();
    search_dirs.iter().find_map(|dir| open_candidate(dir, name))
}

/// Try one directory: join, require a regular file, open.
fn open_candidate(dir: &Path, filename: &str) -> Option<(PathBuf, File)> {
    let candidate = dir.join(filename);
    if !candidate.is_file() {
        return None;
    }
    let file = File::open(&candidate).ok()?;
    Some((candidate, file))
}
