use std::io::Write;

use anyhow::Context;
use tracing::warn;

use crate::commands::HtmlArgs;
use crate::report;
use triage_common::config::Config;
use triage_common::scan::HostRecord;
use triage_common::success;
use triage_core::reader::{self, ScanFile};

pub fn html(args: HtmlArgs, cfg: &Config) -> anyhow::Result<()> {
    let files: Vec<ScanFile> = reader::load_directory(&args.scan.input)?;

    for wanted in &args.hosts {
        let found = files
            .iter()
            .flat_map(ScanFile::hosts)
            .any(|host| host.ip() == wanted.as_str());
        if !found {
            warn!("Host {wanted} does not appear in any scan file");
        }
    }

    let generated: String = chrono::Local::now().format("%Y%m%d%H%M").to_string();
    let page: String = report::html::render(&files, cfg.protocol, &args.hosts, &generated);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(page.as_bytes())
        .context("failed to write HTML report")?;
    stdout.flush()?;

    success!("HTML report written for {} file(s)", files.len());
    Ok(())
}
