mod commands;
mod report;
mod terminal;

use commands::{CommandLine, Commands, html, lists, ports, targets};
use triage_common::config::Config;
use triage_common::scan::Protocol;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.debug, commands.quiet);

    let cfg = Config {
        protocol: if commands.udp { Protocol::Udp } else { Protocol::Tcp },
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Targets(args) => {
            print::header("building target lists", cfg.quiet);
            targets::targets(args, &cfg)
        }
        Commands::Lists => {
            print::header("built-in target lists", cfg.quiet);
            lists::lists(&cfg);
            Ok(())
        }
        Commands::Html(args) => {
            print::header("rendering host tables", cfg.quiet);
            html::html(args, &cfg)
        }
        Commands::Ports(args) => {
            print::header("counting open ports", cfg.quiet);
            ports::ports(args, &cfg)
        }
    }
}
