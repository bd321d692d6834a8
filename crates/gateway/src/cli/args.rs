//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Community directory - members and activity, resilient to a flaky users API
#[derive(Parser, Debug)]
#[command(name = "community-directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// List members with stats
    List,

    /// Add a member
    Add(AddArgs),

    /// Edit a member
    Edit(EditArgs),

    /// Remove a member
    Remove(RemoveArgs),

    /// Show or clear the activity feed
    Activity(ActivityArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "GATEWAY_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000", env = "GATEWAY_PORT")]
    pub port: u16,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long)]
    pub avatar_url: Option<String>,
}

/// Arguments for the edit command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Member id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long)]
    pub avatar_url: Option<String>,
}

/// Arguments for the remove command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Member id
    pub id: String,
}

/// Arguments for the activity command
#[derive(Parser, Debug)]
pub struct ActivityArgs {
    /// Empty the feed instead of printing it
    #[arg(long)]
    pub clear: bool,
}
