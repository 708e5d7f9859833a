use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "faculty-roster")]
#[command(about = "Sync and async student roster demo")]
pub struct CliConfig {
    #[arg(long, default_value = "200", help = "Per-item fetch delay in milliseconds")]
    pub delay_ms: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
