use super::{PortState, Protocol, Service};

/// Read access to one scanned host.
///
/// Classification and reporting only go through this trait, so any report format
/// that can answer these questions can feed the engine.
pub trait HostRecord {
    /// Host identifier, normally the dotted IP address.
    fn ip(&self) -> &str;
    /// First hostname nmap reported, or empty.
    fn hostname(&self) -> &str;
    /// MAC address, or empty.
    fn mac(&self) -> &str;
    /// Open port numbers for `protocol`, in the order the report lists them.
    fn open_ports(&self, protocol: Protocol) -> Vec<u16>;
    /// Service metadata for one port, if nmap identified any.
    fn service(&self, protocol: Protocol, port: u16) -> Option<&Service>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    pub protocol: Protocol,
    pub number: u16,
    pub state: PortState,
    pub service: Option<Service>,
}

impl PortRecord {
    pub fn open(protocol: Protocol, number: u16) -> Self {
        Self {
            protocol,
            number,
            state: PortState::Open,
            service: None,
        }
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.service = Some(service);
        self
    }
}

/// A host as parsed from an nmap XML report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedHost {
    pub ip: String,
    pub hostname: String,
    pub mac: String,
    pub ports: Vec<PortRecord>,
}

impl ScannedHost {
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Default::default()
        }
    }

    pub fn with_port(mut self, port: PortRecord) -> Self {
        self.ports.push(port);
        self
    }
}

impl HostRecord for ScannedHost {
    fn ip(&self) -> &str {
        &self.ip
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn mac(&self) -> &str {
        &self.mac
    }

    fn open_ports(&self, protocol: Protocol) -> Vec<u16> {
        self.ports
            .iter()
            .filter(|port| port.protocol == protocol && port.state.is_open())
            .map(|port| port.number)
            .collect()
    }

    fn service(&self, protocol: Protocol, port: u16) -> Option<&Service> {
        self.ports
            .iter()
            .find(|record| record.protocol == protocol && record.number == port)
            .and_then(|record| record.service.as_ref())
    }
}
