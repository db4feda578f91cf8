pub mod html;
pub mod lists;
pub mod ports;
pub mod targets;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "triage")]
#[command(version)]
#[command(about = "Sorts hosts from nmap XML reports into target lists.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Use UDP ports and the UDP target lists instead of TCP
    #[arg(short, long, global = true)]
    pub udp: bool,

    /// Log every file and match as it is processed
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Less decoration (-q), or errors only (-qq)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print target lists of hosts built from port numbers and service information
    #[command(alias = "t")]
    Targets(TargetsArgs),
    /// Show the built-in target lists
    #[command(alias = "l")]
    Lists,
    /// Render an HTML table of open ports and services per host
    #[command(alias = "w")]
    Html(HtmlArgs),
    /// Count open ports across all hosts
    #[command(alias = "p")]
    Ports(PortsArgs),
}

#[derive(Args)]
pub struct ScanInput {
    /// Directory containing the nmap XML files
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct TargetsArgs {
    #[command(flatten)]
    pub scan: ScanInput,

    /// Print one host per line instead of a comma separated list
    #[arg(short = 'o', long)]
    pub one_per_line: bool,

    /// Print hosts in groups of SIZE per line, one blank line between groups
    #[arg(short, long, value_name = "SIZE", value_parser = clap::value_parser!(u16).range(1..))]
    pub chunk: Option<u16>,

    /// Only build these built-in lists (see `triage lists`)
    #[arg(short = 'x', long, value_name = "NAMES", value_delimiter = ',')]
    pub select: Vec<String>,

    /// Name of a user defined target list; replaces the built-in lists
    #[arg(short, long)]
    pub name: Option<String>,

    /// Description shown for the user defined list
    #[arg(long, requires = "name")]
    pub description: Option<String>,

    /// Ports for the user defined list
    #[arg(short, long, value_name = "PORTS", value_delimiter = ',', requires = "name")]
    pub ports: Vec<u16>,

    /// Strings searched for in service information for the user defined list
    #[arg(short = 's', long, value_name = "KEYWORDS", value_delimiter = ',', requires = "name")]
    pub keywords: Vec<String>,
}

#[derive(Args)]
pub struct HtmlArgs {
    #[command(flatten)]
    pub scan: ScanInput,

    /// Only render these hosts
    #[arg(short = 's', long, value_name = "IPS", value_delimiter = ',')]
    pub hosts: Vec<String>,
}

#[derive(Args)]
pub struct PortsArgs {
    #[command(flatten)]
    pub scan: ScanInput,

    /// Print every port ordered by number instead of the most frequent ones
    #[arg(short, long)]
    pub all: bool,

    /// Print the sum of all open ports first
    #[arg(short, long)]
    pub sum: bool,

    /// How many of the most frequent ports to print
    #[arg(short, long, default_value_t = 20, conflicts_with = "all")]
    pub top: usize,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
