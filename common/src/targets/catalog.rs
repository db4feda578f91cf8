use crate::scan::Protocol;

use super::TargetList;

/// Compile-time form of a built-in target list.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinList {
    pub name: &'static str,
    pub description: &'static str,
    pub ports: &'static [u16],
    pub keywords: &'static [&'static str],
}

impl From<&BuiltinList> for TargetList {
    fn from(builtin: &BuiltinList) -> Self {
        TargetList::new(
            builtin.name,
            builtin.description,
            builtin.ports.iter().copied(),
            builtin.keywords.iter(),
        )
    }
}

const fn list(
    name: &'static str,
    description: &'static str,
    ports: &'static [u16],
    keywords: &'static [&'static str],
) -> BuiltinList {
    BuiltinList { name, description, ports, keywords }
}

// Microsoft port assignments follow KB 832017.
pub const TCP_LISTS: &[BuiltinList] = &[
    list("FTP", "FTP Servers", &[21], &["ftp"]),
    list("SSH", "SSH Servers", &[22], &["ssh", "secure shell"]),
    list("TELNET", "Telnet Servers", &[23], &["telnet"]),
    list(
        "MAIL",
        "Mail Servers",
        &[25, 110, 143, 465, 587, 993, 995],
        &["mail", "exchange", "imap", "pop3", "smtp"],
    ),
    list("DNS", "Domain Name Services", &[53], &["dns"]),
    list("FINGER", "Finger Servers", &[79], &["finger"]),
    list(
        "WEB",
        "Web Servers",
        &[80, 443, 1188, 5800, 8000, 8008, 8080, 8443],
        &["http", "web", "apache", "iis"],
    ),
    list("KERBEROS", "Kerberos Servers", &[88, 464], &["kerberos"]),
    list(
        "MS",
        "Microsoft Services",
        &[135, 139, 445, 1033, 5722],
        &["rpc", "smb", "netbios"],
    ),
    list("LDAP", "LDAP Servers", &[389, 636], &["ldap"]),
    list("MEDIA", "Media Services", &[554, 1755], &["rtsp", "mms"]),
    list(
        "DB",
        "Database Servers",
        &[1433, 1434, 1521, 1522, 1525, 1529, 3306, 5432],
        &["sql", "database", "oracle", "postgres"],
    ),
    list(
        "RDA",
        "Remote Desktop Application Services",
        &[3389, 5900],
        &["terminal", "vnc"],
    ),
    list(
        "CONF",
        "Configuration Management Servers",
        &[1270, 2701, 2702, 2703, 2704, 51515],
        &["sms", "mom"],
    ),
];

pub const UDP_LISTS: &[BuiltinList] = &[
    list("TFTP", "TFTP Servers", &[69], &["tftp"]),
    list("NTP", "Network Time Servers", &[123], &["ntp"]),
    list("MS", "Microsoft Services", &[137, 138], &["netbios"]),
    list("SNMP", "SNMP Services", &[161], &["snmp"]),
];

/// The ordered set of target lists active for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    lists: Vec<TargetList>,
}

impl Catalog {
    /// The built-in catalog of one protocol. There is no merged TCP+UDP view.
    pub fn builtin(protocol: Protocol) -> Self {
        let builtins = match protocol {
            Protocol::Tcp => TCP_LISTS,
            Protocol::Udp => UDP_LISTS,
        };
        Self {
            lists: builtins.iter().map(TargetList::from).collect(),
        }
    }

    /// A catalog holding only the user's ad-hoc list.
    pub fn custom(list: TargetList) -> Self {
        Self { lists: vec![list] }
    }

    pub fn from_lists(lists: Vec<TargetList>) -> Self {
        Self { lists }
    }

    /// Keeps only lists whose name is in `names` (ASCII case-insensitive), in
    /// catalog order. An empty `names` keeps everything.
    pub fn select<S: AsRef<str>>(self, names: &[S]) -> Self {
        if names.is_empty() {
            return self;
        }

        let lists = self
            .lists
            .into_iter()
            .filter(|list| {
                names
                    .iter()
                    .any(|name| name.as_ref().trim().eq_ignore_ascii_case(&list.name))
            })
            .collect();
        Self { lists }
    }

    /// Names from `names` that no list in this catalog answers to.
    pub fn unknown_names<'a, S: AsRef<str>>(&self, names: &'a [S]) -> Vec<&'a str> {
        names
            .iter()
            .map(|name| name.as_ref().trim())
            .filter(|name| !self.lists.iter().any(|list| list.name.eq_ignore_ascii_case(name)))
            .collect()
    }

    pub fn lists(&self) -> &[TargetList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(catalog: &Catalog) -> Vec<&str> {
        catalog.lists().iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn builtin_catalogs_are_protocol_specific() {
        let tcp = Catalog::builtin(Protocol::Tcp);
        let udp = Catalog::builtin(Protocol::Udp);
        assert_eq!(tcp.len(), 14);
        assert_eq!(names(&udp), ["TFTP", "NTP", "MS", "SNMP"]);

        let web = tcp.lists().iter().find(|l| l.name == "WEB").unwrap();
        assert!(web.has_port(443));
        assert_eq!(web.description, "Web Servers");
    }

    #[test]
    fn builtin_names_are_unique_per_catalog() {
        for builtins in [TCP_LISTS, UDP_LISTS] {
            for (i, a) in builtins.iter().enumerate() {
                assert!(builtins[i + 1..].iter().all(|b| b.name != a.name), "duplicate {}", a.name);
            }
        }
    }

    #[test]
    fn select_keeps_catalog_order() {
        let catalog = Catalog::builtin(Protocol::Tcp).select(&["db", "WEB", "ssh"]);
        assert_eq!(names(&catalog), ["SSH", "WEB", "DB"]);
    }

    #[test]
    fn select_with_no_names_keeps_everything() {
        let none: [&str; 0] = [];
        assert_eq!(Catalog::builtin(Protocol::Udp).select(&none).len(), 4);
    }

    #[test]
    fn select_with_only_unknown_names_is_empty() {
        let catalog = Catalog::builtin(Protocol::Udp).select(&["WEB"]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn unknown_names_are_reported() {
        let catalog = Catalog::builtin(Protocol::Tcp);
        assert_eq!(catalog.unknown_names(&["WEB", "GOPHER", " ftp "]), ["GOPHER"]);
    }
}
