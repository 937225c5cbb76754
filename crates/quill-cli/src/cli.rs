use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quill", about = "Quill — blog platform server", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(ServeArgs),
    /// Print the default configuration as TOML
    DefaultConfig,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the bind address
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
}
