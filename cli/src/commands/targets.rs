use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::{debug, warn};

use crate::commands::TargetsArgs;
use crate::report::targets::{self, Layout};
use crate::terminal::{colors, format, print};
use triage_common::config::Config;
use triage_common::success;
use triage_common::targets::{Catalog, TargetList};
use triage_core::aggregator::{self, Classification};
use triage_core::reader::{self, ScanFile};

pub fn targets(args: TargetsArgs, cfg: &Config) -> anyhow::Result<()> {
    let catalog: Catalog = build_catalog(&args, cfg)?;
    let layout: Layout = Layout::from_options(args.one_per_line, args.chunk.map(usize::from));

    let start_time: Instant = Instant::now();
    let files: Vec<ScanFile> = reader::load_directory(&args.scan.input)?;
    let classification: Classification = aggregator::aggregate(
        files.iter().map(ScanFile::hosts),
        cfg.protocol,
        &catalog,
    );

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(targets::render(&classification, layout).as_bytes())
        .context("failed to write target lists")?;
    stdout.flush()?;

    summary(&args.scan.input, &files, &classification, start_time.elapsed(), cfg);
    Ok(())
}

/// Resolves which lists this run uses. A user defined list beats any selection.
fn build_catalog(args: &TargetsArgs, cfg: &Config) -> anyhow::Result<Catalog> {
    if let Some(name) = &args.name {
        let list = TargetList::custom(
            name,
            args.description.as_deref(),
            args.ports.iter().copied(),
            &args.keywords,
        )?;
        if !args.select.is_empty() {
            debug!("User defined list '{}' replaces the selected lists", list.name);
        }
        return Ok(Catalog::custom(list));
    }

    let builtin = Catalog::builtin(cfg.protocol);
    for unknown in builtin.unknown_names(&args.select) {
        warn!("No built-in {} target list named '{unknown}'", cfg.protocol);
    }
    Ok(builtin.select(&args.select))
}

fn summary(input: &Path, files: &[ScanFile], classification: &Classification, total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    if classification.has_no_hits() {
        print::header("zero hosts matched", cfg.quiet);
        print::no_results(cfg.quiet);
        return;
    }

    let host_total: usize = files.iter().map(|file| file.hosts.len()).sum();
    let filled: usize = classification.non_empty().count();

    print::header("summary", cfg.quiet);
    print::GLOBAL_KEY_WIDTH.set(8);
    print::aligned_line("Input", input.display().to_string());
    print::aligned_line("Protocol", cfg.protocol.to_string().to_uppercase());
    print::aligned_line("Files", format::plural(files.len(), "file", "files"));
    print::aligned_line("Hosts", format::plural(host_total, "host", "hosts"));
    print::fat_separator(cfg.quiet);

    let lists: ColoredString = format::plural(filled, "target list", "target lists").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output = format!("{lists} built in {total_time}").color(colors::TEXT_DEFAULT);
    print::centerln(&output.to_string());
    success!("Done");
}
