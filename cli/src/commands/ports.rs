use std::io::Write;

use anyhow::Context;

use crate::commands::PortsArgs;
use crate::report::ports::{self, PortView};
use crate::terminal::{format, print};
use triage_common::config::Config;
use triage_common::success;
use triage_core::histogram::PortHistogram;
use triage_core::reader::{self, ScanFile};

pub fn ports(args: PortsArgs, cfg: &Config) -> anyhow::Result<()> {
    let files: Vec<ScanFile> = reader::load_directory(&args.scan.input)?;
    let histogram: PortHistogram =
        PortHistogram::from_hosts(files.iter().flat_map(ScanFile::hosts), cfg.protocol);

    let view: PortView = match args.all {
        true => PortView::All,
        false => PortView::Top(args.top),
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(ports::render(&histogram, view, args.sum).as_bytes())
        .context("failed to write port counts")?;
    stdout.flush()?;

    if histogram.is_empty() {
        print::header(&format!("no open {} ports", cfg.protocol), cfg.quiet);
        print::no_results(cfg.quiet);
        return Ok(());
    }

    success!(
        "Counted {} across {} distinct ports",
        format::plural(histogram.total(), "open port", "open ports"),
        histogram.by_port().len()
    );
    Ok(())
}
