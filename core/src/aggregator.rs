//! Runs every host of every scan file against every target list.
//!
//! Iteration order is files, then lists, then hosts, then ports. A host is
//! appended to a list the first time it matches and never again, so each
//! list ends up unique and in first-seen order.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use triage_common::scan::{HostRecord, Protocol};
use triage_common::targets::Catalog;

use crate::classifier::{self, MatchReason};

/// Hosts collected for one target list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetHits {
    pub name: String,
    pub description: String,
    hosts: Vec<String>,
    seen: HashSet<String>,
}

impl TargetHits {
    fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            hosts: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn push(&mut self, host: &str) -> bool {
        if self.seen.contains(host) {
            return false;
        }
        self.seen.insert(host.to_string());
        self.hosts.push(host.to_string());
        true
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// Target list name to matched hosts, in catalog order.
///
/// Lists sharing a name share one entry; the first definition's description is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    entries: Vec<TargetHits>,
    index: HashMap<String, usize>,
}

impl Classification {
    /// One empty entry per list in `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        let mut classification = Self::default();
        for list in catalog.lists() {
            if classification.index.contains_key(&list.name) {
                continue;
            }
            classification
                .index
                .insert(list.name.clone(), classification.entries.len());
            classification
                .entries
                .push(TargetHits::new(&list.name, &list.description));
        }
        classification
    }

    /// Adds `host` under `list_name` unless it is already there.
    ///
    /// Returns `true` when the host was new. Unknown list names are ignored.
    pub fn record(&mut self, list_name: &str, host: &str) -> bool {
        match self.index.get(list_name) {
            Some(&idx) => self.entries[idx].push(host),
            None => false,
        }
    }

    pub fn get(&self, list_name: &str) -> Option<&TargetHits> {
        self.index.get(list_name).map(|&idx| &self.entries[idx])
    }

    pub fn hosts(&self, list_name: &str) -> &[String] {
        self.get(list_name).map(TargetHits::hosts).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetHits> {
        self.entries.iter()
    }

    /// Entries with at least one host. Empty lists are never reported.
    pub fn non_empty(&self) -> impl Iterator<Item = &TargetHits> {
        self.entries.iter().filter(|hits| !hits.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when no list matched any host.
    pub fn has_no_hits(&self) -> bool {
        self.entries.iter().all(TargetHits::is_empty)
    }
}

/// Classifies the hosts of every file against every list of `catalog`.
///
/// Each item of `files` is the host sequence of one scan file, in the order the
/// files should be visited.
pub fn aggregate<'a, H, F>(files: F, protocol: Protocol, catalog: &Catalog) -> Classification
where
    H: HostRecord + 'a,
    F: IntoIterator<Item = &'a [H]>,
{
    let mut classification = Classification::new(catalog);

    for hosts in files {
        for list in catalog.lists() {
            for host in hosts {
                let Some(reason) = classifier::classify(host, protocol, list) else {
                    continue;
                };
                if classification.record(&list.name, host.ip()) {
                    match reason {
                        MatchReason::Port(port) => {
                            debug!("{} -> {} (port {port})", host.ip(), list.name)
                        }
                        MatchReason::Keyword { port, keyword } => {
                            debug!("{} -> {} ('{keyword}' on port {port})", host.ip(), list.name)
                        }
                    }
                }
            }
        }
    }

    classification
}
