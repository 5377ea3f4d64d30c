// Wed Jan 15 2026 - Alex

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "structmap")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Typed views of C socket address structures over raw memory", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Overrides the configured log level (error, warn, info, debug, trace).
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// JSON configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Byte order of wire fields: network, little, big or native.
    #[arg(long, global = true)]
    pub wire_order: Option<String>,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a layout, or list the known layouts.
    Layout(LayoutArgs),
    /// Decode a socket address from its hex image.
    Decode(DecodeArgs),
    /// Encode a socket address such as `[::1]:8080` to its hex image.
    Encode(EncodeArgs),
    /// Map a layout over a file at some offset.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    pub name: Option<String>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct DecodeArgs {
    pub hex: String,
}

#[derive(Parser, Debug)]
pub struct EncodeArgs {
    pub address: SocketAddr,

    #[arg(long)]
    pub spaced: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,

    #[arg(short, long, default_value = "0")]
    pub offset: usize,

    #[arg(long)]
    pub layout: Option<String>,

    /// Number of consecutive structures to show.
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,
}

impl InspectArgs {
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("--count must be at least 1".to_string());
        }
        Ok(())
    }
}
