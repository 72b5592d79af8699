use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "nplot",
    version,
    about = "Plot Nginx URL hits over time by parsing an access log"
)]
pub struct Cli {
    /// Path to the access log (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Stop reading once this many distinct endpoints have been seen
    #[arg(long, default_value = "300")]
    pub max_endpoints: NonZeroUsize,

    /// Emit the bucketed series as JSON instead of a terminal chart
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
