use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dashkit")]
#[command(about = "Browse the demo user directory and try the date inputs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn", global = true)]
    pub log_level: String,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of the user directory.
    Users {
        /// Global search text.
        #[arg(long, short)]
        query: Option<String>,

        /// Only users with this status.
        #[arg(long)]
        status: Option<String>,

        /// Sort column, optionally with `:asc` or `:desc`.
        #[arg(long)]
        sort: Option<String>,

        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,

        /// Use fuzzy instead of substring search.
        #[arg(long)]
        fuzzy: bool,

        /// Select rows by id.
        #[arg(long, value_delimiter = ',')]
        select: Option<Vec<String>>,

        /// Select every row matching the filter.
        #[arg(long)]
        select_all: bool,

        /// Run a bulk action on the selected rows.
        #[arg(long)]
        action: Option<String>,

        /// Hide columns by id.
        #[arg(long, value_delimiter = ',')]
        hide: Option<Vec<String>>,

        /// Write the filtered rows to a CSV file.
        #[arg(long)]
        export: Option<PathBuf>,

        /// Table configuration as JSON.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Type text into a date field and blur it.
    Date {
        text: String,

        /// Value committed before typing.
        #[arg(long)]
        default: Option<String>,

        /// Time of day; switches to the date-time field.
        #[arg(long)]
        time: Option<String>,
    },
}
