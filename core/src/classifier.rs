//! Per-host, per-list match decision.
//!
//! A host's open ports are walked in report order. For each port the list's port
//! set is tried first, then its keywords against the port's service fingerprint.
//! The first hit decides; there is no scoring.

use triage_common::scan::{HostRecord, Protocol};
use triage_common::targets::TargetList;

/// Why a host landed on a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    /// The port number is in the list's port set.
    Port(u16),
    /// The service on `port` contains `keyword`.
    Keyword { port: u16, keyword: String },
}

/// Returns the first reason `host` belongs on `list`, or `None`.
pub fn classify<H>(host: &H, protocol: Protocol, list: &TargetList) -> Option<MatchReason>
where
    H: HostRecord + ?Sized,
{
    if list.is_degenerate() {
        return None;
    }

    for port in host.open_ports(protocol) {
        if list.has_port(port) {
            return Some(MatchReason::Port(port));
        }

        if !list.has_keywords() {
            continue;
        }

        if let Some(keyword) = host
            .service(protocol, port)
            .and_then(|service| list.keyword_hit(service))
        {
            return Some(MatchReason::Keyword {
                port,
                keyword: keyword.to_string(),
            });
        }
    }
    None
}

pub fn matches<H>(host: &H, protocol: Protocol, list: &TargetList) -> bool
where
    H: HostRecord + ?Sized,
{
    classify(host, protocol, list).is_some()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use triage_common::scan::{PortRecord, ScannedHost, Service};
    use triage_common::targets::Catalog;

    fn builtin(protocol: Protocol, name: &str) -> TargetList {
        Catalog::builtin(protocol)
            .lists()
            .iter()
            .find(|list| list.name == name)
            .cloned()
            .unwrap()
    }

    fn named(name: &str) -> Service {
        Service {
            name: name.into(),
            ..Default::default()
        }
    }

    #[test]
    fn web_matches_by_port_without_service() {
        let host = ScannedHost::new("10.0.0.5").with_port(PortRecord::open(Protocol::Tcp, 443));
        assert_eq!(
            classify(&host, Protocol::Tcp, &builtin(Protocol::Tcp, "WEB")),
            Some(MatchReason::Port(443))
        );
    }

    #[test]
    fn mail_matches_by_keyword_on_odd_port() {
        let host = ScannedHost::new("10.0.0.6")
            .with_port(PortRecord::open(Protocol::Tcp, 9999).with_service(named("smtp")));
        assert_eq!(
            classify(&host, Protocol::Tcp, &builtin(Protocol::Tcp, "MAIL")),
            Some(MatchReason::Keyword { port: 9999, keyword: "smtp".into() })
        );
    }

    #[test]
    fn port_hit_wins_over_keyword_on_same_port() {
        let host = ScannedHost::new("10.0.0.7")
            .with_port(PortRecord::open(Protocol::Tcp, 22).with_service(named("ssh")));
        assert_eq!(
            classify(&host, Protocol::Tcp, &builtin(Protocol::Tcp, "SSH")),
            Some(MatchReason::Port(22))
        );
    }

    #[test]
    fn earlier_keyword_hit_beats_later_port_hit() {
        let host = ScannedHost::new("10.0.0.8")
            .with_port(PortRecord::open(Protocol::Tcp, 2222).with_service(named("ssh")))
            .with_port(PortRecord::open(Protocol::Tcp, 22));
        assert_eq!(
            classify(&host, Protocol::Tcp, &builtin(Protocol::Tcp, "SSH")),
            Some(MatchReason::Keyword { port: 2222, keyword: "ssh".into() })
        );
    }

    #[test]
    fn custom_port_only_list_ignores_services() {
        let empty: [&str; 0] = [];
        let list = TargetList::custom("CustomSSH", None, [2222], empty).unwrap();

        let on_2222 = ScannedHost::new("10.0.0.9").with_port(PortRecord::open(Protocol::Tcp, 2222));
        let on_22 = ScannedHost::new("10.0.0.10")
            .with_port(PortRecord::open(Protocol::Tcp, 22).with_service(named("ssh")));

        assert!(matches(&on_2222, Protocol::Tcp, &list));
        assert!(!matches(&on_22, Protocol::Tcp, &list));
    }

    #[test]
    fn degenerate_list_never_matches() {
        let empty: [&str; 0] = [];
        let list = TargetList::new("NONE", "Nothing", [], empty);
        let host = ScannedHost::new("10.0.0.11")
            .with_port(PortRecord::open(Protocol::Tcp, 80).with_service(named("http")));
        assert!(!matches(&host, Protocol::Tcp, &list));
    }

    #[test]
    fn protocols_do_not_leak() {
        let host = ScannedHost::new("10.0.0.12").with_port(PortRecord::open(Protocol::Tcp, 161));
        assert!(!matches(&host, Protocol::Udp, &builtin(Protocol::Udp, "SNMP")));

        let host = ScannedHost::new("10.0.0.13").with_port(PortRecord::open(Protocol::Udp, 80));
        assert!(!matches(&host, Protocol::Tcp, &builtin(Protocol::Tcp, "WEB")));
    }

    #[test]
    fn host_without_open_ports_never_matches() {
        let host = ScannedHost::new("10.0.0.14");
        assert!(!matches(&host, Protocol::Tcp, &builtin(Protocol::Tcp, "WEB")));
    }
}
