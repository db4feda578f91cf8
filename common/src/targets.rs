//! # Target Lists
//!
//! A target list is a named category of hosts ("Web Servers", "SNMP Services")
//! described by well-known ports and service keywords. A run classifies hosts
//! against an ordered [`Catalog`] of lists: a built-in one per protocol, a
//! name-filtered subset of it, or a single list the user defines on the spot.

mod catalog;
mod list;

pub use catalog::{BuiltinList, Catalog, TCP_LISTS, UDP_LISTS};
pub use list::TargetList;
