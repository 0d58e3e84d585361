use clap::{Parser, Subcommand};

use crate::yaml::config::{DEFAULT_MAX_BUFFER_SIZE, DEFAULT_SEPARATOR};
use crate::yaml::buffer::DEFAULT_TAB_WIDTH;

/// Prints the structural path of lines of a YAML document read from stdin
#[derive(Parser)]
#[command(author, about, long_about=None, disable_version_flag(true))]
pub struct Args {
    /// force color mode (defaults to check tty)
    #[arg(long)]
    pub color: bool,

    /// force no-color mode (defaults to check tty)
    #[arg(long)]
    pub no_color: bool,

    /// display version and quit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// prepend time to each log line
    #[arg(long)]
    pub log_time: bool,

    /// Turn general verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configure component wise logging (COMPONENT[=LEVEL])
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub log: Option<Vec<String>>,

    /// quiet "no element" errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Read the document from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<String>,

    /// Separator between path segments
    #[arg(short, long, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Escape separators and backslashes found inside keys
    #[arg(short, long)]
    pub escape: bool,

    /// Use double quotes in index expressions
    #[arg(long)]
    pub double_quotes: bool,

    /// Columns per tab when measuring indentation
    #[arg(long, default_value_t = DEFAULT_TAB_WIDTH)]
    pub tab_width: usize,

    /// Largest document (in bytes) resolved line by line
    #[arg(long = "max-size", default_value_t = DEFAULT_MAX_BUFFER_SIZE)]
    pub max_size: usize,

    #[command(subcommand)]
    pub action: Option<Actions>,
}

#[derive(Subcommand)]
pub enum Actions {
    GetPath {
        /// Get the path of the element on given line

        /// Line number (starting at 1)
        #[clap(name = "LINE")]
        line: usize,
    },
    IndexExpr {
        /// Get the element on given line as a bracketed key expression

        /// Line number (starting at 1)
        #[clap(name = "LINE")]
        line: usize,
    },
    Chain {
        /// List the ancestors of given line, root first

        /// Line number (starting at 1)
        #[clap(name = "LINE")]
        line: usize,
    },
    Paths {
        /// Get the path of every element, one per line

        /// Resolve documents larger than --max-size anyway
        #[arg(long)]
        force: bool,
    },
    #[clap(name = "paths-0")]
    Paths0 {
        /// Get the path of every element, separated by NUL char

        /// Resolve documents larger than --max-size anyway
        #[arg(long)]
        force: bool,
    },
    Locate {
        /// Get the line numbers of the elements at given path

        /// The path to look for
        #[clap(name = "PATH")]
        path: String,
    },
}
