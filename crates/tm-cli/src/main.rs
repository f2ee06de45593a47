//! TM Tracker - warehouse pallet inventory and FIFO shipping analysis
//!
//! A CLI tool that folds inventory list exports into pallet summaries,
//! builds FIFO shipping plans, and manages the truck dispatch schedule.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
