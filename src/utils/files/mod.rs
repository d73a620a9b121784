use crate::core::loader::FileLoader;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Expand command-line paths into the list of files to process.
///
/// Explicit file arguments are kept whatever their extension; only files found
/// by walking a directory are filtered to supported inputs. Hidden entries are
/// skipped while walking. Each directory's files come back sorted.
pub fn discover_inputs(paths: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, recursive, &mut inputs)?;
        } else {
            inputs.push(path.clone());
        }
    }
    Ok(inputs)
}

fn walk_dir(dir: &Path, recursive: bool, inputs: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| !is_hidden(path))
        .collect::<Vec<_>>();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            if recursive {
                walk_dir(&path, recursive, inputs)?;
            }
        } else if FileLoader::is_supported(&path) {
            inputs.push(path);
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
