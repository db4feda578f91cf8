//! Loading nmap XML reports from disk.
//!
//! [`load_directory`] is what commands call: it enumerates a directory, parses
//! each report in turn and skips (with a warning) any file that cannot be read
//! or is not an nmap report. The lower-level pieces are public for callers that
//! already have a path or the XML text.

use std::path::PathBuf;

use thiserror::Error;
use triage_common::scan::ScannedHost;

mod directory;
mod nmap;

pub use directory::{list_scan_files, load_directory, read_scan_file};
pub use nmap::parse_nmap_xml;

/// The hosts of one parsed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFile {
    pub path: PathBuf,
    pub hosts: Vec<ScannedHost>,
}

impl ScanFile {
    pub fn hosts(&self) -> &[ScannedHost] {
        &self.hosts
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed XML at byte {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    #[error("document is not an nmap XML report")]
    NotNmap,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read scan directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
