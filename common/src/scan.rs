//! # Scan Record Model
//!
//! The read-only view of an nmap report that classification and reporting work on.
//!
//! A report is a list of hosts. Each host has an identifier (its IP address), an
//! optional hostname and MAC address, and the ports nmap recorded for it. Ports
//! carry a protocol, a state, and optionally the service nmap identified on them.

mod host;
mod protocol;
mod service;

pub use host::{HostRecord, PortRecord, ScannedHost};
pub use protocol::{PortState, Protocol};
pub use service::Service;
