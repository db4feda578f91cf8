/// Service identification nmap attached to a port. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub product: String,
    pub version: String,
    pub extra_info: String,
}

impl Service {
    /// Lower-cased `name + product + version`, the string keywords are searched in.
    ///
    /// The fields are joined without a separator and `extra_info` is left out.
    pub fn fingerprint(&self) -> String {
        let mut joined = String::with_capacity(self.name.len() + self.product.len() + self.version.len());
        joined.push_str(&self.name);
        joined.push_str(&self.product);
        joined.push_str(&self.version);
        joined.to_lowercase()
    }
}
