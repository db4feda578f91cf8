use std::collections::BTreeSet;

use crate::error::TargetListError;
use crate::scan::Service;

/// One target list definition.
///
/// `name` is the key results are stored under and the handle used to select
/// built-in lists; `description` is what reports show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetList {
    pub name: String,
    pub description: String,
    ports: BTreeSet<u16>,
    keywords: Vec<String>,
}

impl TargetList {
    /// Builds a list, normalising keywords to trimmed, lower-cased, non-empty and unique.
    pub fn new<K>(
        name: impl Into<String>,
        description: impl Into<String>,
        ports: impl IntoIterator<Item = u16>,
        keywords: impl IntoIterator<Item = K>,
    ) -> Self
    where
        K: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }

        Self {
            name: name.into(),
            description: description.into(),
            ports: ports.into_iter().collect(),
            keywords: normalized,
        }
    }

    /// Builds the ad-hoc list a user asks for at run time.
    ///
    /// Fails when the name is blank or when neither ports nor keywords survive
    /// normalisation. The description falls back to the name.
    pub fn custom<K>(
        name: &str,
        description: Option<&str>,
        ports: impl IntoIterator<Item = u16>,
        keywords: impl IntoIterator<Item = K>,
    ) -> Result<Self, TargetListError>
    where
        K: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(TargetListError::EmptyName);
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(name);
        let list = Self::new(name, description, ports, keywords);

        if list.is_degenerate() {
            return Err(TargetListError::NoCriteria {
                name: name.to_string(),
            });
        }
        Ok(list)
    }

    pub fn ports(&self) -> &BTreeSet<u16> {
        &self.ports
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn has_port(&self, port: u16) -> bool {
        self.ports.contains(&port)
    }

    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// A list with neither ports nor keywords. It never matches anything.
    pub fn is_degenerate(&self) -> bool {
        self.ports.is_empty() && self.keywords.is_empty()
    }

    /// First keyword found in the service fingerprint, if any.
    pub fn keyword_hit(&self, service: &Service) -> Option<&str> {
        let fingerprint = service.fingerprint();
        self.keywords
            .iter()
            .find(|keyword| fingerprint.contains(keyword.as_str()))
            .map(String::as_str)
    }
}
