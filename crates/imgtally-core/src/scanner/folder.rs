/// Folder image counter — counts image files directly inside one folder.
///
/// Matching is by file extension only; file contents are never opened.
/// Hidden entries (leading `.`) are skipped, matching `*.jpg`-style glob
/// behaviour, and symlinks are resolved so a link to an image counts while
/// a link to a directory does not.
use crate::error::ScanError;
use crate::scanner::is_dangling_link;
use std::path::Path;
use tracing::debug;

/// Extensions recognised as images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check whether `ext` (without the leading dot) is an image extension.
pub fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

/// Check whether a path's extension marks it as an image.
///
/// Only the name is inspected; the caller decides whether the entry is a file.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_image_extension)
}

/// Count image files directly inside `dir` (non-recursive).
///
/// A missing directory counts as zero and dangling symlinks are skipped.
/// Any other failure to read the folder is returned as [`ScanError::ReadDir`].
pub fn count_images(dir: &Path) -> Result<u64, ScanError> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let walker = jwalk::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .skip_hidden(true)
        .follow_links(true)
        .parallelism(jwalk::Parallelism::Serial);

    let mut count: u64 = 0;
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
            continue;
        }
        if is_image_file(Path::new(entry.file_name())) {
            count += 1;
        }
    }
    Ok(count)
}
