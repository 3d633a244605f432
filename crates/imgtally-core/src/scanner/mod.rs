/// Scanner module — walks a dataset laid out as `base/<type>/<subtype>/`.
///
/// The walk is exactly two levels deep:
/// - **Level 1:** every directory under the base is a *type* folder.
/// - **Level 2:** every directory under a type folder whose name contains
///   [`SUBTYPE_MARKER`] (case-insensitive) is a *subtype* folder, and its
///   images are counted with [`folder::count_images`].
///
/// Entries at each level are visited in file-name order so the discovery
/// order (and therefore tie order in the report) is reproducible.
pub mod folder;

use crate::error::ScanError;
use crate::model::SubtypeRecord;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Marker a folder name must contain to be treated as a subtype folder.
pub const SUBTYPE_MARKER: &str = "subtipo";

/// Check whether a folder name carries the subtype marker.
pub fn is_subtype_folder(name: &str) -> bool {
    name.to_lowercase().contains(SUBTYPE_MARKER)
}

/// Walk the dataset under `base` and count images in every subtype folder.
///
/// Records are returned in discovery order (type folder, then subtype folder,
/// each sorted by name). A missing base path is logged and yields an empty
/// list, as does a base path that is not a directory. Unreadable
/// directories are returned as errors.
pub fn collect_subtypes(base: &Path) -> Result<Vec<SubtypeRecord>, ScanError> {
    if !base.exists() {
        error!("Dataset base path '{}' does not exist", base.display());
        return Ok(Vec::new());
    }
    if !base.is_dir() {
        error!("Dataset base path '{}' is not a directory", base.display());
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for (type_name, type_path) in child_dirs(base)? {
        for (subtype_name, subtype_path) in child_dirs(&type_path)? {
            let name = subtype_name.to_string_lossy();
            if !is_subtype_folder(&name) {
                debug!("Skipping {} (no subtype marker)", subtype_path.display());
                continue;
            }
            let count = folder::count_images(&subtype_path)?;
            debug!(
                "{}/{}: {count} images",
                type_name.to_string_lossy(),
                name
            );
            records.push(SubtypeRecord::new(&*name, count));
        }
    }

    info!(
        "Found {} subtype folders under {}",
        records.len(),
        base.display()
    );
    Ok(records)
}

/// List the immediate child directories of `dir`, sorted by name.
///
/// Files and dangling symlinks are skipped. Hidden folders are kept; only
/// the image counter applies glob-style hidden filtering.
fn child_dirs(dir: &Path) -> Result<Vec<(OsString, PathBuf)>, ScanError> {
    let walker = jwalk::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .skip_hidden(false)
        .follow_links(true)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    let mut dirs = Vec::new();
    for entry_result in walker {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) if is_dangling_link(&err) => {
                debug!("Skipping dangling link: {err}");
                continue;
            }
            Err(source) => {
                return Err(ScanError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };
        if entry.file_type().is_dir() {
            dirs.push((entry.file_name().to_os_string(), entry.path()));
        }
    }
    Ok(dirs)
}

/// Whether a walk error comes from following a symlink whose target is gone.
///
/// Such entries are neither files nor directories and are skipped, while
/// failures to read a folder itself (e.g. permission denied) stay fatal.
pub(crate) fn is_dangling_link(err: &jwalk::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn subtype_marker_is_case_insensitive() {
        assert!(is_subtype_folder("subtipo_1"));
        assert!(is_subtype_folder("Placa_SUBTIPO_B"));
        assert!(is_subtype_folder("xSubTipox"));
    }

    #[test]
    fn folders_without_marker_are_not_subtypes() {
        assert!(!is_subtype_folder("other"));
        assert!(!is_subtype_folder("subtype_1"));
        assert!(!is_subtype_folder("sub_tipo"));
    }

    #[test]
    fn base_that_is_a_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("train");
        fs::write(&file, b"not a dataset").unwrap();

        let records = collect_subtypes(&file).unwrap();
        assert!(records.is_empty());
    }

    /// A type-level symlink to nothing is not a directory, so the walk
    /// carries on past it.
    #[cfg(unix)]
    #[test]
    fn dangling_type_link_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        fs::create_dir_all(base.join("typeA").join("subtipo_1")).unwrap();
        std::os::unix::fs::symlink(base.join("gone"), base.join("stale_link")).unwrap();

        let records = collect_subtypes(base).unwrap();
        assert_eq!(records, vec![SubtypeRecord::new("subtipo_1", 0)]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_link_inside_subtype_is_not_counted() {
        let tmp = TempDir::new().unwrap();
        let subtype = tmp.path().join("typeA").join("subtipo_1");
        fs::create_dir_all(&subtype).unwrap();
        fs::write(subtype.join("a.jpg"), b"").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone.png"), subtype.join("dangling.png"))
            .unwrap();

        let records = collect_subtypes(tmp.path()).unwrap();
        assert_eq!(records, vec![SubtypeRecord::new("subtipo_1", 1)]);
    }

    #[test]
    fn missing_base_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let records = collect_subtypes(&tmp.path().join("train")).unwrap();
        assert!(records.is_empty());
    }

    /// Files at the type level and non-marker folders must be ignored.
    #[test]
    fn skips_files_and_unmarked_folders() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        fs::write(base.join("stray.jpg"), b"").unwrap();
        let type_a = base.join("typeA");
        fs::create_dir_all(type_a.join("subtipo_1")).unwrap();
        fs::create_dir_all(type_a.join("misc")).unwrap();
        fs::write(type_a.join("subtipo_file.png"), b"").unwrap();
        fs::write(type_a.join("subtipo_1").join("x.jpg"), b"").unwrap();
        fs::write(type_a.join("misc").join("y.jpg"), b"").unwrap();

        let records = collect_subtypes(base).unwrap();
        assert_eq!(records, vec![SubtypeRecord::new("subtipo_1", 1)]);
    }

    /// Subtype folders nested deeper than two levels are not visited.
    #[test]
    fn does_not_recurse_past_two_levels() {
        let tmp = TempDir::new().unwrap();
        let deep = tmp.path().join("typeA").join("group").join("subtipo_deep");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("a.png"), b"").unwrap();

        let records = collect_subtypes(tmp.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn discovery_order_follows_folder_names() {
        let tmp = TempDir::new().unwrap();
        for (ty, sub) in [("typeB", "subtipo_z"), ("typeA", "subtipo_b"), ("typeA", "subtipo_a")] {
            fs::create_dir_all(tmp.path().join(ty).join(sub)).unwrap();
        }

        let records = collect_subtypes(tmp.path()).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["subtipo_a", "subtipo_b", "subtipo_z"]);
    }
}
