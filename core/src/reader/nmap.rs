use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, warn};
use triage_common::scan::{PortRecord, PortState, Protocol, ScannedHost, Service};

use super::ParseError;

/// Parses the text of an nmap XML report (`nmap -oX`) into its hosts, in document order.
pub fn parse_nmap_xml(xml: &str) -> Result<Vec<ScannedHost>, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut report = ReportState::default();
    let mut buf = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|source| ParseError::Xml {
                position: reader.buffer_position(),
                source,
            })?;

        match event {
            Event::Start(e) => report.open(&e),
            Event::Empty(e) => {
                report.open(&e);
                report.close(e.name().as_ref());
            }
            Event::End(e) => report.close(e.name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !report.seen_root {
        return Err(ParseError::NotNmap);
    }
    Ok(report.hosts)
}

#[derive(Debug, Default)]
struct ReportState {
    seen_root: bool,
    hosts: Vec<ScannedHost>,
    host: Option<HostDraft>,
    port: Option<PortDraft>,
}

#[derive(Debug, Default)]
struct HostDraft {
    ipv4: Option<String>,
    ipv6: Option<String>,
    mac: String,
    hostname: String,
    ports: Vec<PortRecord>,
}

#[derive(Debug)]
struct PortDraft {
    protocol: Option<String>,
    portid: Option<String>,
    state: PortState,
    service: Option<Service>,
}

impl ReportState {
    fn open(&mut self, e: &BytesStart<'_>) {
        match e.name().as_ref() {
            b"nmaprun" => self.seen_root = true,
            b"host" => self.host = Some(HostDraft::default()),
            b"address" => {
                if let Some(host) = self.host.as_mut() {
                    host.add_address(e);
                }
            }
            b"hostname" => {
                if let Some(host) = self.host.as_mut() {
                    if host.hostname.is_empty() {
                        host.hostname = attribute(e, b"name").unwrap_or_default();
                    }
                }
            }
            b"port" if self.host.is_some() => {
                self.port = Some(PortDraft {
                    protocol: attribute(e, b"protocol"),
                    portid: attribute(e, b"portid"),
                    state: PortState::Other(String::new()),
                    service: None,
                });
            }
            b"state" => {
                if let Some(port) = self.port.as_mut() {
                    port.state = PortState::from(attribute(e, b"state").unwrap_or_default().as_str());
                }
            }
            b"service" => {
                if let Some(port) = self.port.as_mut() {
                    port.service = Some(Service {
                        name: attribute(e, b"name").unwrap_or_default(),
                        product: attribute(e, b"product").unwrap_or_default(),
                        version: attribute(e, b"version").unwrap_or_default(),
                        extra_info: attribute(e, b"extrainfo").unwrap_or_default(),
                    });
                }
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"port" => {
                if let (Some(draft), Some(host)) = (self.port.take(), self.host.as_mut()) {
                    if let Some(port) = draft.finish() {
                        host.ports.push(port);
                    }
                }
            }
            b"host" => {
                if let Some(draft) = self.host.take() {
                    if let Some(host) = draft.finish() {
                        self.hosts.push(host);
                    }
                }
            }
            _ => {}
        }
    }
}

impl HostDraft {
    fn add_address(&mut self, e: &BytesStart<'_>) {
        let Some(addr) = attribute(e, b"addr") else {
            return;
        };
        match attribute(e, b"addrtype").as_deref() {
            Some("ipv6") => {
                self.ipv6.get_or_insert(addr);
            }
            Some("mac") => {
                if self.mac.is_empty() {
                    self.mac = addr;
                }
            }
            // nmap omits addrtype only for ipv4
            _ => {
                self.ipv4.get_or_insert(addr);
            }
        }
    }

    fn finish(self) -> Option<ScannedHost> {
        let Some(ip) = self.ipv4.or(self.ipv6) else {
            warn!("Skipping a host entry without an IP address");
            return None;
        };
        Some(ScannedHost {
            ip,
            hostname: self.hostname,
            mac: self.mac,
            ports: self.ports,
        })
    }
}

impl PortDraft {
    fn finish(self) -> Option<PortRecord> {
        let protocol_name = self.protocol.unwrap_or_default();
        let Ok(protocol) = protocol_name.parse::<Protocol>() else {
            debug!("Ignoring port on unsupported protocol '{protocol_name}'");
            return None;
        };

        let portid = self.portid.unwrap_or_default();
        let Ok(number) = portid.trim().parse::<u16>() else {
            warn!("Skipping {protocol} port with invalid number '{portid}'");
            return None;
        };

        Some(PortRecord {
            protocol,
            number,
            state: self.state,
            service: self.service,
        })
    }
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|value| value.into_owned())
}
