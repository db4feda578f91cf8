use crate::scan::Protocol;

#[derive(Debug, Default)]
pub struct Config {
    /// Which open ports (and which built-in catalog) a run looks at.
    pub protocol: Protocol,
    /// Decoration level.
    ///
    /// `0` prints headers and summaries, `1` drops them, `2` also hides warnings.
    pub quiet: u8,
}
