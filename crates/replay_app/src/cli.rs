use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::logging::LogDestination;

#[derive(Debug, Parser)]
#[command(
    name = "search-replay",
    version,
    about = "Compose a search, share it as a replay link, and play replay links back"
)]
pub struct Cli {
    /// Page configuration (RON). Defaults apply when the file does not exist.
    #[arg(long, global = true, default_value = "search_replay.ron")]
    pub config: PathBuf,

    /// Override the page address share links point back to.
    #[arg(long, global = true)]
    pub page: Option<String>,

    #[arg(long, global = true, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a replay link for a query.
    Share(FormArgs),
    /// Play a replay link and print where it redirects.
    Open {
        /// Full link, or just its `?q=...` query string.
        link: String,
        /// Skip all pauses; the sequence of frames is unchanged.
        #[arg(long)]
        instant: bool,
    },
    /// Submit a query directly and print the redirect target.
    Search(FormArgs),
}

#[derive(Debug, Args)]
pub struct FormArgs {
    #[arg(short, long)]
    pub query: String,
    #[arg(short, long)]
    pub engine: Option<String>,
    #[arg(short, long)]
    pub custom: Option<String>,
}
