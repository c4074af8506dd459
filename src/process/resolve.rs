use std::path::{Path, PathBuf};

fn is_regular_file(path: &Path) -> bool {
    path.metadata().map(|meta| meta.is_file()).unwrap_or(false)
}

/// `base/name`. With `base` of `.` this is `./name`, so the spawn never
/// falls back to its own PATH lookup.
fn in_dir(base: &Path, name: &str) -> PathBuf {
    base.join(name)
}

/// Finds the file to execute for `name`.
///
/// Names containing `/` are taken as they are. Otherwise each entry of
/// `path_var` is tried left to right, an empty entry meaning `cwd`. When
/// that fails, a file called `name` in `cwd` is still accepted for
/// interactive sessions or when PATH is set. An empty `path_var` counts as
/// unset.
pub fn resolve(
    name: &str,
    path_var: Option<&str>,
    interactive: bool,
    cwd: &Path,
) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    if name.contains('/') {
        let path = Path::new(name);
        return is_regular_file(path).then(|| path.to_path_buf());
    }

    let path_var = path_var.filter(|value| !value.is_empty());
    if let Some(dirs) = path_var {
        for dir in dirs.split(':') {
            let candidate = if dir.is_empty() {
                in_dir(cwd, name)
            } else {
                Path::new(dir).join(name)
            };
            if is_regular_file(&candidate) {
                tracing::debug!(command = name, path = %candidate.display(), "resolved");
                return Some(candidate);
            }
        }
    }

    let fallback = in_dir(cwd, name);
    if (interactive || path_var.is_some()) && is_regular_file(&fallback) {
        return Some(fallback);
    }

    None
}
