use std::fmt::Write;

use triage_common::scan::{HostRecord, Protocol};
use triage_core::reader::ScanFile;

const TABLE_HEADERS: [&str; 5] = ["PORT", "SERVICE", "PRODUCT", "VERSION", "EXTRAINFO"];

/// Renders the per-host open port tables of every file.
///
/// `selected` limits output to those host identifiers; empty means every host.
/// Files without a rendered host are left out entirely.
pub fn render(files: &[ScanFile], protocol: Protocol, selected: &[String], generated: &str) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>NMap Results</title>\n");
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>NMAP Results - Parsed: {}</h1>", html_escape(generated));

    for file in files {
        let mut file_heading = false;

        for host in file.hosts() {
            if !selected.is_empty() && !selected.iter().any(|ip| ip == host.ip()) {
                continue;
            }
            if !file_heading {
                let _ = writeln!(html, "<h2>{}</h2>", html_escape(&file.path.display().to_string()));
                file_heading = true;
            }
            render_host(&mut html, host, protocol);
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_host<H: HostRecord>(html: &mut String, host: &H, protocol: Protocol) {
    let _ = writeln!(html, "<h3>Scan Results {}</h3>", html_escape(host.ip()));
    let _ = writeln!(html, "Name: {}<br>", html_escape(host.hostname()));
    let _ = writeln!(html, "MAC: {}<br>", html_escape(host.mac()));

    html.push_str("<table border=\"2\">\n<tr bgcolor=\"gray\">");
    for header in TABLE_HEADERS {
        let _ = write!(html, "<th>{header}</th>");
    }
    html.push_str("</tr>\n");

    for port in host.open_ports(protocol) {
        let service = host.service(protocol, port);
        let cells: [&str; 4] = match service {
            Some(s) => [s.name.as_str(), s.product.as_str(), s.version.as_str(), s.extra_info.as_str()],
            None => ["", "", "", ""],
        };

        let _ = write!(html, "<tr><td>{port}</td>");
        for cell in cells {
            let _ = write!(html, "<td>{}</td>", html_escape(cell));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
}

fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
