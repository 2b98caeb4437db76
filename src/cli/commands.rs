//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - list: browse the catalog by category or with filters
//! - show / compare / top: inspect tools
//! - import: load tools and articles from a YAML file
//! - articles: list, read and like blog articles
//! - subscribe: join the newsletter

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolshelf - browse, filter and compare AI tools
#[derive(Parser, Debug)]
#[command(name = "toolshelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tools, grouped by category unless a filter is given
    List {
        /// Case-insensitive search over name and description
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Category (text, image, audio, video, data_analysis, translation, chatbot, other, all)
        #[arg(short = 'k', long)]
        category: Option<String>,

        /// Pricing type (free, paid, free_trial, all)
        #[arg(short, long)]
        pricing: Option<String>,

        /// Only tools listing this exact feature
        #[arg(short, long)]
        feature: Option<String>,

        /// Comma-separated tool ids to mark for comparison
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Show one tool in detail
    Show {
        /// Tool ID
        id: String,
    },

    /// Compare tools side by side
    Compare {
        /// Comma-separated tool ids, e.g. "1,2,3"
        ids: String,
    },

    /// Highest rated tools of a category
    Top {
        /// Category to rank
        #[arg(short = 'k', long)]
        category: String,

        /// Number of tools to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Import tools and articles from a YAML or JSON file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Blog article commands
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },

    /// Subscribe an email address to the newsletter
    Subscribe {
        /// Email address
        email: String,
    },
}

/// Blog article subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ArticleCommands {
    /// List articles
    List {
        /// Case-insensitive search over title and summary
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Article category, or "all"
        #[arg(short = 'k', long)]
        category: Option<String>,
    },

    /// Read an article
    Show {
        /// Article ID
        id: String,
    },

    /// Like an article, or take a like back
    Like {
        /// Article ID
        id: String,
    },
}
