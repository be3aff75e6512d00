use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collects DICOM files below `directory`
///
/// Accepts `.dcm` and `.dicom` extensions (any case) and extension-less files
/// carrying the DICM magic. Unreadable entries are skipped. The result is
/// sorted so batches are processed in a stable order.
pub fn collect_dicom_files(directory: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(directory)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| match path.extension() {
            Some(ext) => ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom"),
            None => {
                let found = is_dicom_file(path);
                if found {
                    debug!("Found headerless DICOM file: {}", path.display());
                }
                found
            }
        })
        .collect();
    files.sort();
    files
}

/// Checks if a file has a DICOM header
///
/// DICOM files typically have:
/// - 128-byte preamble
/// - 4-byte "DICM" magic string at offset 128
pub fn is_dicom_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    // Read first 132 bytes (128-byte preamble + 4-byte "DICM" magic)
    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_with_magic(path: &Path, magic: &[u8]) {
        let mut file = File::create(path).unwrap();
        file.write_all(&[0u8; 128]).unwrap();
        file.write_all(magic).unwrap();
        file.write_all(b"additional data").unwrap();
    }

    #[test]
    fn test_is_dicom_file_with_valid_header() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_dicom");
        write_with_magic(&file_path, b"DICM");
        assert!(is_dicom_file(&file_path));
    }

    #[test]
    fn test_is_dicom_file_wrong_magic() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("wrong_magic");
        write_with_magic(&file_path, b"NOTM");
        assert!(!is_dicom_file(&file_path));
    }

    #[test]
    fn test_is_dicom_file_too_small() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("small_file");
        File::create(&file_path).unwrap().write_all(b"small").unwrap();
        assert!(!is_dicom_file(&file_path));
    }

    #[test]
    fn test_collect_recurses_and_filters() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("series1").join("echo2");
        std::fs::create_dir_all(&nested).unwrap();

        File::create(temp_dir.path().join("file1.dcm")).unwrap();
        File::create(temp_dir.path().join("file2.DCM")).unwrap();
        File::create(nested.join("file3.dicom")).unwrap();
        File::create(nested.join("notes.txt")).unwrap();
        write_with_magic(&nested.join("IM0001"), b"DICM");
        File::create(nested.join("README"))
            .unwrap()
            .write_all(b"not dicom")
            .unwrap();

        let files = collect_dicom_files(temp_dir.path());
        assert_eq!(files.len(), 4);
        assert!(files.contains(&nested.join("IM0001")));
        assert!(!files.contains(&nested.join("README")));

        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }

    #[test]
    fn test_collect_missing_directory_is_empty() {
        assert!(collect_dicom_files(Path::new("/nonexistent/dir")).is_empty());
    }
}
