//! Interface file discovery using walkdir.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::codegen::GenError;

/// Suffix that marks a file as an assertion interface.
pub const INTERFACE_SUFFIX: &str = "_assertions.rs";

/// Find interface files directly inside `dir`, sorted by file name.
///
/// Only the top level of the directory is scanned; sub-directories are
/// separate packages and are configured explicitly.
pub fn find_interface_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>, GenError> {
    if !dir.is_dir() {
        return Err(GenError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "logic directory not found"),
        ));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1);

    for entry in walker
        .into_iter()
        .filter_entry(|e| !is_excluded(e.path(), exclude))
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && is_interface_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Check if a file name follows the interface naming convention.
fn is_interface_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(INTERFACE_SUFFIX))
}

/// Check if a path contains an excluded component.
fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    path.components().any(|c| {
        matches!(c, std::path::Component::Normal(name)
            if name.to_str().is_some_and(|s| excludes.iter().any(|e| e == s)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_interface_file() {
        assert!(is_interface_file(Path::new("src/logic/map_assertions.rs")));
        assert!(!is_interface_file(Path::new("src/logic/types.rs")));
        assert!(!is_interface_file(Path::new("src/logic/map_assertions.txt")));
    }

    #[test]
    fn test_is_excluded() {
        let excludes = vec!["gen".to_string()];
        assert!(is_excluded(Path::new("logic/gen/map_assertions.rs"), &excludes));
        assert!(!is_excluded(Path::new("logic/map_assertions.rs"), &excludes));
    }

    #[test]
    fn test_scan_is_sorted_and_top_level_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zeta_assertions.rs"), "").unwrap();
        fs::write(dir.path().join("alpha_assertions.rs"), "").unwrap();
        fs::write(dir.path().join("types.rs"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/deep_assertions.rs"), "").unwrap();

        let files = find_interface_files(dir.path(), &[]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["alpha_assertions.rs", "zeta_assertions.rs"]);
    }

    #[test]
    fn test_scan_honors_excludes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("keep_assertions.rs"), "").unwrap();
        fs::write(dir.path().join("skip_assertions.rs"), "").unwrap();

        let files =
            find_interface_files(dir.path(), &["skip_assertions.rs".to_string()]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_dir_is_descriptive() {
        let err = find_interface_files(Path::new("/definitely/not/here"), &[]).unwrap_err();
        assert!(err.to_string().contains("logic directory not found"));
    }
}
