#![forbid(unsafe_code)]

use clap::{Parser, Subcommand, ValueEnum};
use ic_core::model::MasterType;
use std::path::PathBuf;

/// Maintenance commands for the incontext store.
#[derive(Debug, Parser)]
#[command(name = "ic-admin", version)]
pub struct Cli {
    /// Directory holding the database file.
    #[arg(long, env = "IC_STORAGE_DIR", default_value = "instance", global = true)]
    pub storage_dir: PathBuf,

    /// Filter used when RUST_LOG is unset (trace, debug, info, warn, error, off).
    #[arg(long, env = "IC_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[arg(long, env = "IC_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MasterKind {
    List,
    Agent,
}

impl From<MasterKind> for MasterType {
    fn from(kind: MasterKind) -> Self {
        match kind {
            MasterKind::List => MasterType::List,
            MasterKind::Agent => MasterType::Agent,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the schema if missing and list the tables.
    InitDb,
    /// Print the supported models.
    Models,
    /// Register a user so it can own records.
    AddUser { username: String },
    /// List a user's masters of one type.
    Masters {
        #[arg(long)]
        user_id: i64,
        #[arg(long = "type", value_enum, default_value_t = MasterKind::List)]
        master_type: MasterKind,
    },
    /// Print one master with its children.
    ShowMaster {
        #[arg(long)]
        user_id: i64,
        master_id: i64,
    },
}
