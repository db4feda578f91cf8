#![cfg(test)]
use crate::fixtures::{host, report, scan_dir};
use triage_common::scan::Protocol;
use triage_common::targets::{Catalog, TargetList};
use triage_core::aggregator::{Classification, aggregate};
use triage_core::histogram::PortHistogram;
use triage_core::reader::{self, ScanFile};

fn classify_dir(dir: &std::path::Path, protocol: Protocol, catalog: &Catalog) -> Classification {
    let files: Vec<ScanFile> = reader::load_directory(dir).expect("scan directory is readable");
    aggregate(files.iter().map(ScanFile::hosts), protocol, catalog)
}

#[test]
fn web_server_found_by_port_alone() {
    let dir = scan_dir(&[("scan.xml", report(&[host("10.0.0.5", &[("tcp", 443, "open", "")])]))]);

    let result = classify_dir(dir.path(), Protocol::Tcp, &Catalog::builtin(Protocol::Tcp));

    assert_eq!(result.hosts("WEB"), ["10.0.0.5"]);
    let reported: Vec<&str> = result.non_empty().map(|hits| hits.description.as_str()).collect();
    assert_eq!(reported, ["Web Servers"]);
}

#[test]
fn mail_server_found_by_keyword_on_odd_port() {
    let dir = scan_dir(&[("scan.xml", report(&[host("10.0.0.6", &[("tcp", 9999, "open", "smtp")])]))]);

    let result = classify_dir(dir.path(), Protocol::Tcp, &Catalog::builtin(Protocol::Tcp));

    assert_eq!(result.hosts("MAIL"), ["10.0.0.6"]);
    assert!(result.hosts("WEB").is_empty());
}

#[test]
fn custom_list_only_uses_its_own_criteria() {
    let dir = scan_dir(&[(
        "scan.xml",
        report(&[
            host("10.0.0.7", &[("tcp", 2222, "open", "")]),
            host("10.0.0.8", &[("tcp", 22, "open", "ssh")]),
        ]),
    )]);
    let empty: [&str; 0] = [];
    let catalog = Catalog::custom(TargetList::custom("CustomSSH", None, [2222], empty).unwrap());

    let result = classify_dir(dir.path(), Protocol::Tcp, &catalog);

    assert_eq!(result.len(), 1);
    assert_eq!(result.hosts("CustomSSH"), ["10.0.0.7"]);
}

#[test]
fn hosts_deduplicate_across_files_in_listing_order() {
    let dir = scan_dir(&[
        ("b-second.xml", report(&[host("10.0.0.1", &[("tcp", 80, "open", "http")]), host("10.0.0.3", &[("tcp", 8080, "open", "")])])),
        ("a-first.xml", report(&[host("10.0.0.2", &[("tcp", 443, "open", "")]), host("10.0.0.1", &[("tcp", 443, "open", "")])])),
    ]);

    let result = classify_dir(dir.path(), Protocol::Tcp, &Catalog::builtin(Protocol::Tcp));

    assert_eq!(result.hosts("WEB"), ["10.0.0.2", "10.0.0.1", "10.0.0.3"]);
}

#[test]
fn closed_and_filtered_ports_do_not_count() {
    let dir = scan_dir(&[(
        "scan.xml",
        report(&[host(
            "10.0.0.9",
            &[("tcp", 80, "closed", "http"), ("tcp", 3306, "filtered", "mysql"), ("udp", 161, "open|filtered", "snmp")],
        )]),
    )]);

    let tcp = classify_dir(dir.path(), Protocol::Tcp, &Catalog::builtin(Protocol::Tcp));
    let udp = classify_dir(dir.path(), Protocol::Udp, &Catalog::builtin(Protocol::Udp));

    assert!(tcp.has_no_hits());
    assert!(udp.has_no_hits());
}

#[test]
fn protocols_are_isolated() {
    let dir = scan_dir(&[(
        "scan.xml",
        report(&[
            host("10.0.0.10", &[("tcp", 161, "open", ""), ("tcp", 123, "open", "")]),
            host("10.0.0.11", &[("udp", 161, "open", "snmp"), ("udp", 80, "open", "")]),
        ]),
    )]);

    let udp = classify_dir(dir.path(), Protocol::Udp, &Catalog::builtin(Protocol::Udp));
    let tcp = classify_dir(dir.path(), Protocol::Tcp, &Catalog::builtin(Protocol::Tcp));

    assert_eq!(udp.hosts("SNMP"), ["10.0.0.11"]);
    assert!(udp.hosts("NTP").is_empty());
    assert!(tcp.hosts("WEB").is_empty());
}

#[test]
fn broken_files_are_skipped_without_losing_the_rest() {
    let dir = scan_dir(&[
        ("1.xml", report(&[host("10.0.0.12", &[("tcp", 21, "open", "")])])),
        ("2.xml", "<nmaprun><host>".to_string() + "</nmaprun>"),
        ("3.xml", "this is not xml at all".to_string()),
        ("4.xml", report(&[host("10.0.0.13", &[("tcp", 21, "open", "")])])),
    ]);

    let result = classify_dir(dir.path(), Protocol::Tcp, &Catalog::builtin(Protocol::Tcp));

    assert_eq!(result.hosts("FTP"), ["10.0.0.12", "10.0.0.13"]);
}

#[test]
fn selection_that_misses_everything_produces_nothing() {
    let dir = scan_dir(&[("scan.xml", report(&[host("10.0.0.14", &[("tcp", 80, "open", "")])]))]);
    let catalog = Catalog::builtin(Protocol::Tcp).select(&["SNMP"]);

    let result = classify_dir(dir.path(), Protocol::Tcp, &catalog);

    assert!(result.is_empty());
    assert_eq!(result.non_empty().count(), 0);
}

#[test]
fn repeated_runs_agree() {
    let hosts: Vec<String> = (1..=30)
        .map(|i| {
            let service = if i % 3 == 0 { "microsoft-ds" } else { "postgresql" };
            host(&format!("10.2.0.{i}"), &[("tcp", 10_000 + i, "open", service)])
        })
        .collect();
    let dir = scan_dir(&[("scan.xml", report(&hosts))]);
    let catalog = Catalog::builtin(Protocol::Tcp);

    let first = classify_dir(dir.path(), Protocol::Tcp, &catalog);
    let second = classify_dir(dir.path(), Protocol::Tcp, &catalog);

    assert_eq!(first, second);
    assert_eq!(first.hosts("DB").len(), 20);
    assert!(first.hosts("MS").is_empty());
}

#[test]
fn histogram_counts_every_file() {
    let dir = scan_dir(&[
        ("a.xml", report(&[host("10.0.0.1", &[("tcp", 80, "open", ""), ("tcp", 22, "open", "")])])),
        ("b.xml", report(&[host("10.0.0.1", &[("tcp", 80, "open", "")])])),
    ]);
    let files: Vec<ScanFile> = reader::load_directory(dir.path()).unwrap();

    let histogram = PortHistogram::from_hosts(files.iter().flat_map(ScanFile::hosts), Protocol::Tcp);

    assert_eq!(histogram.total(), 3);
    assert_eq!(histogram.top(1), [(80, 2)]);
}
