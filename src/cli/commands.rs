use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tick", about = concat!("[x] tick v", env!("CARGO_PKG_VERSION"), " - one list, three views"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    Add(AddArgs),
    /// List tasks
    List(ListArgs),
    /// Flip a task between active and completed
    Toggle(ToggleArgs),
    /// Change a task's name
    Edit(EditArgs),
    /// Remove a task
    Rm(RmArgs),
    /// Show task counts
    Stats,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    pub name: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter to apply (all, active, completed)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task id
    pub id: u64,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: u64,
    /// New task name
    pub name: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    pub id: u64,
}
