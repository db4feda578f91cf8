use std::fmt::Write;

use triage_core::histogram::PortHistogram;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortView {
    /// The `n` most frequent ports with their share of the total.
    Top(usize),
    /// Every port by number.
    All,
}

/// Renders the histogram. Nothing but the optional sum line is printed when no port is open.
pub fn render(histogram: &PortHistogram, view: PortView, with_sum: bool) -> String {
    let mut out = String::new();

    if with_sum {
        let _ = writeln!(out, "Sum of open ports: {}", histogram.total());
    }
    if histogram.is_empty() {
        return out;
    }

    match view {
        PortView::All => {
            out.push_str("Port\tCount\n");
            for (port, count) in histogram.by_port() {
                let _ = writeln!(out, "{port}\t{count}");
            }
        }
        PortView::Top(n) => {
            out.push_str("Port\tCount\tPercent\n");
            for (port, count) in histogram.top(n) {
                let _ = writeln!(out, "{port}\t{count}\t{:.2}", histogram.percent(count));
            }
        }
    }
    out
}
