use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gtrack")]
#[command(about = "Per-business-day ticket time tracking from git history")]
#[command(version)]
pub struct Cli {
    #[arg(short = 'p', long, help = "Path to git repository (defaults to current directory)")]
    pub repo: Option<PathBuf>,

    #[arg(short = 'l', long, default_value_t = 30, help = "Number of days to look back")]
    pub last_days: u32,

    #[arg(short = 's', long, help = "Start date (YYYY-MM-DD), overrides --last-days")]
    pub start: Option<String>,

    #[arg(long, help = "Attribute commits to this user (defaults to git config user.name)")]
    pub user: Option<String>,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON")]
    pub ndjson: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::report::exec(self)
    }
}
