//! devconsts - print Linux device ABI constants
//!
//! Usage: devconsts [--format text|json] [--extended] [--decode] [--only LABEL]...
//!
//! With no arguments prints one `<label> = 0x<hex> (<decimal>) ` line for each
//! open flag, block-device and spidev request code, in a fixed order.

use anyhow::Result;
use clap::Parser;

mod app;
mod cli;

fn main() -> Result<()> {
    // Diagnostics go to stderr and stay silent unless RUST_LOG asks for them
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = crate::cli::Cli::parse();
    crate::app::run(&cli)
}
