//! The classification engine.
//!
//! [`reader`] turns nmap XML reports into [`ScannedHost`](triage_common::scan::ScannedHost)s,
//! [`classifier`] decides whether one host belongs on one target list, and
//! [`aggregator`] runs every host of every file against every list. [`histogram`]
//! counts open ports for the frequency report.

pub mod aggregator;
pub mod classifier;
pub mod histogram;
pub mod reader;
