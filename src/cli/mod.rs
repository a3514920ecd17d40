//! CLI module for the Balance Coach API

pub mod serve;

use clap::{Parser, Subcommand};

/// Balance Coach API - document-grounded AI coaching
#[derive(Parser)]
#[command(name = "balance-coach-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
