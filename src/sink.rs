//! Persistence sink: writes finished buffers to disk under a suggested
//! filename. The encoder itself never touches the file system; callers hand
//! its output here (or to any other sink).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Appends the `.tiff` extension unless the suggestion already carries it.
pub fn tiff_file_name(name: &str) -> String {
    if name.ends_with(".tiff") {
        name.to_owned()
    } else {
        format!("{name}.tiff")
    }
}

/// Writes `bytes` to `dir` under the (normalized) suggested filename and
/// returns the full path of the written file.
pub fn save_to_dir(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(tiff_file_name(name));
    fs::write(&path, bytes)?;
    info!(path = %path.display(), len = bytes.len(), "wrote tiff file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_extension_when_missing() {
        assert_eq!(tiff_file_name("scan_001"), "scan_001.tiff");
        assert_eq!(tiff_file_name("scan_001.tiff"), "scan_001.tiff");
    }

    #[test]
    fn writes_buffer_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_to_dir(dir.path(), "pages", &[1, 2, 3]).unwrap();

        assert_eq!(path.file_name().unwrap(), "pages.tiff");
        assert_eq!(fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn missing_directory_surfaces_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = save_to_dir(&missing, "pages", &[0]).unwrap_err();
        assert!(matches!(err, crate::TiffError::Io(_)));
    }
}
