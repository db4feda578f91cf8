#![cfg(test)]
use std::fs;

use tempfile::TempDir;

/// Wraps host elements in a minimal nmap report.
pub fn report(hosts: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\"?>\n<nmaprun scanner=\"nmap\" version=\"7.94\">\n{}\n</nmaprun>\n",
        hosts.join("\n")
    )
}

/// One `<host>` with the given `(protocol, port, state, service name)` entries.
pub fn host(ip: &str, ports: &[(&str, u16, &str, &str)]) -> String {
    let ports: String = ports
        .iter()
        .map(|(protocol, port, state, service)| {
            let service = match service.is_empty() {
                true => String::new(),
                false => format!("<service name=\"{service}\" method=\"probed\" conf=\"10\"/>"),
            };
            format!(
                "<port protocol=\"{protocol}\" portid=\"{port}\"><state state=\"{state}\"/>{service}</port>"
            )
        })
        .collect();

    format!(
        "<host><status state=\"up\"/><address addr=\"{ip}\" addrtype=\"ipv4\"/><ports>{ports}</ports></host>"
    )
}

/// A temporary scan directory holding `(file name, content)` pairs.
pub fn scan_dir(files: &[(&str, String)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("write fixture");
    }
    dir
}
