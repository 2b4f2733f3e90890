//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::util::{EditStep, parse_edit_step};

/// `QuickConn` command-line interface for quick-connect descriptors
#[derive(Parser)]
#[command(name = "quickconn-cli")]
#[command(author, version, about = "QuickConn command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "QUICKCONN_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List supported protocols
    #[command(about = "List supported protocols and their quick-connect formats")]
    Protocols {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Parse quick-connect text
    #[command(about = "Parse quick-connect text into structured fields")]
    Parse {
        /// Protocol id (default from settings)
        #[arg(short = 'P', long)]
        protocol: Option<String>,

        /// Quick-connect text, e.g. user@host:2222
        text: String,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Render structured fields as quick-connect text
    #[command(about = "Render structured fields as quick-connect text")]
    Format {
        /// Protocol id (default from settings)
        #[arg(short = 'P', long)]
        protocol: Option<String>,

        /// Username
        #[arg(short, long)]
        user: Option<String>,

        /// Hostname or address
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port (default: protocol default)
        #[arg(short, long)]
        port: Option<u16>,

        /// Local session name
        #[arg(short, long)]
        nickname: Option<String>,

        /// Print the external URI instead of the quick-connect text
        #[arg(long)]
        uri: bool,
    },

    /// Open an external URI
    #[command(about = "Read an external URI such as ssh://user@host:22/#name")]
    Uri {
        /// URI to read
        uri: String,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Replay editor events
    #[command(
        about = "Replay edits through the host editor",
        long_about = "Replay edits through the host editor, printing every notification.\n\n\
                      Events: protocol=ID, text=RAW, username=, hostname=, port=, nickname=,\n\
                      name= (display name), color=gray|red|green|blue, fontsize=, expand, collapse"
    )]
    Edit {
        /// Protocol to select before the events
        #[arg(short = 'P', long)]
        protocol: Option<String>,

        /// Resume a saved editor state
        #[arg(long, value_name = "NAME")]
        resume: Option<String>,

        /// Save the final editor state
        #[arg(long, value_name = "NAME")]
        save: Option<String>,

        /// Output format of the final state
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,

        /// Events to replay, in order
        #[arg(value_parser = parse_edit_step)]
        events: Vec<EditStep>,
    },

    /// List or delete saved editor states
    #[command(about = "List saved editor states")]
    States {
        /// Delete the named state instead of listing
        #[arg(long, value_name = "NAME")]
        delete: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}
