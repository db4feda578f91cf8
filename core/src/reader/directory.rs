use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{ScanError, ScanFile, parse_nmap_xml};

/// Every `*.xml` file directly inside `dir`, sorted by path.
pub fn list_scan_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, ScanError> {
    let dir = dir.as_ref();
    let directory_error = |source| ScanError::Directory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(directory_error)? {
        let path = entry.map_err(directory_error)?.path();
        if path.is_file() && has_xml_extension(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads and parses one report.
pub fn read_scan_file(path: impl AsRef<Path>) -> Result<ScanFile, ScanError> {
    let path = path.as_ref();

    let xml = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let hosts = parse_nmap_xml(&xml).map_err(|source| ScanError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ScanFile {
        path: path.to_path_buf(),
        hosts,
    })
}

/// Reads every report in `dir`.
///
/// Only an unreadable directory is an error. Reports that fail to read or parse
/// are logged and left out.
pub fn load_directory(dir: impl AsRef<Path>) -> Result<Vec<ScanFile>, ScanError> {
    let dir = dir.as_ref();
    let paths = list_scan_files(dir)?;
    info!("Found {} scan file(s) in {}", paths.len(), dir.display());

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        debug!("Processing {}", path.display());
        match read_scan_file(&path) {
            Ok(file) => {
                debug!("{} host(s) in {}", file.hosts.len(), path.display());
                files.push(file);
            }
            Err(e) => warn!("Skipping file: {e}"),
        }
    }
    Ok(files)
}

fn has_xml_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}
