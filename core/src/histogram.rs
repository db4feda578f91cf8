//! Open port frequencies across every scanned host.

use std::collections::BTreeMap;

use triage_common::scan::{HostRecord, Protocol};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortHistogram {
    counts: BTreeMap<u16, usize>,
    total: usize,
}

impl PortHistogram {
    /// Counts every open port of every host. A host present in two files counts twice.
    pub fn from_hosts<'a, H, I>(hosts: I, protocol: Protocol) -> Self
    where
        H: HostRecord + 'a,
        I: IntoIterator<Item = &'a H>,
    {
        let mut histogram = Self::default();
        for host in hosts {
            for port in host.open_ports(protocol) {
                histogram.add(port);
            }
        }
        histogram
    }

    pub fn add(&mut self, port: u16) {
        *self.counts.entry(port).or_insert(0) += 1;
        self.total += 1;
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, port: u16) -> usize {
        self.counts.get(&port).copied().unwrap_or(0)
    }

    /// Every `(port, count)` by ascending port.
    pub fn by_port(&self) -> Vec<(u16, usize)> {
        self.counts.iter().map(|(&port, &count)| (port, count)).collect()
    }

    /// The `n` most frequent ports, count descending, ties by ascending port.
    pub fn top(&self, n: usize) -> Vec<(u16, usize)> {
        let mut ranked = self.by_port();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Share of `count` in the total, as a percentage.
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * count as f64 / self.total as f64
    }
}
