use triage_common::config::Config;
use triage_common::scan::Protocol;
use triage_common::targets::{Catalog, TargetList};

use crate::terminal::{format, print};

/// Shows both built-in catalogs, TCP first, whatever protocol the run was given.
pub fn lists(cfg: &Config) {
    for protocol in [Protocol::Tcp, Protocol::Udp] {
        let catalog: Catalog = Catalog::builtin(protocol);
        print::header(&format!("{protocol} target lists"), cfg.quiet);
        print_catalog(catalog.lists());
    }
}

fn print_catalog(lists: &[TargetList]) {
    for (idx, list) in lists.iter().enumerate() {
        print::tree_head(idx, &list.description);
        print::as_tree_one_level(format::target_list_to_detail(list));
        if idx + 1 != lists.len() {
            print::print("");
        }
    }
}
