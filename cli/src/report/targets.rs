use std::fmt::Write;

use triage_core::aggregator::Classification;

/// How the hosts of one target list are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// All hosts on one line, comma separated.
    Comma,
    /// One host per line.
    PerLine,
    /// `n` hosts per line separated by spaces, a blank line after each group.
    Chunked(usize),
}

impl Layout {
    /// A chunk size of one is the same as one host per line.
    pub fn from_options(one_per_line: bool, chunk: Option<usize>) -> Self {
        match chunk {
            Some(size) if size > 1 => Layout::Chunked(size),
            Some(_) => Layout::PerLine,
            None if one_per_line => Layout::PerLine,
            None => Layout::Comma,
        }
    }
}

/// Renders every non-empty list in catalog order.
pub fn render(classification: &Classification, layout: Layout) -> String {
    let mut out = String::new();

    for hits in classification.non_empty() {
        let _ = writeln!(out, "Target List: {}", hits.description);
        let _ = writeln!(out, "Target Count: {}", hits.len());

        match layout {
            Layout::Comma => {
                let _ = writeln!(out, "{}", hits.hosts().join(","));
            }
            Layout::PerLine => {
                for host in hits.hosts() {
                    let _ = writeln!(out, "{host}");
                }
            }
            Layout::Chunked(size) => {
                for group in hits.hosts().chunks(size) {
                    let _ = writeln!(out, "{}", group.join(" "));
                    out.push('\n');
                }
            }
        }
        out.push_str("\n\n");
    }
    out
}
