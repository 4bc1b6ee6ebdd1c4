use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "handbook", bin_name = "handbook", version)]
#[command(about = "Pages of categorized snippets to copy and notes to keep at hand", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the handbook data (defaults to $HANDBOOK_HOME or the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List pages
    #[command(alias = "ls")]
    List,

    /// Show a page with its categories and entries
    #[command(alias = "s")]
    Show {
        /// Page id (e.g. general-handbook)
        page: String,
    },

    /// Add, rename or remove pages
    #[command(subcommand)]
    Page(PageCommands),

    /// Add, rename or remove categories
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Add, edit, remove or copy entries
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Replace everything with the default handbook
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, confirm-destructive)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PageCommands {
    /// Add a page
    Add { name: String },

    /// Rename a page (its id stays the same)
    Rename { page: String, name: String },

    /// Remove a page and everything in it
    #[command(alias = "delete")]
    Rm {
        page: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a category to a page
    Add { page: String, name: String },

    /// Rename a category (its id stays the same)
    Rename {
        page: String,
        category: String,
        name: String,
    },

    /// Remove a category and its entries
    #[command(alias = "delete")]
    Rm { page: String, category: String },
}

#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Add an entry to a category
    Add {
        page: String,
        category: String,
        title: String,
        content: String,

        /// Make this a static info entry instead of a copyable one
        #[arg(long)]
        info: bool,
    },

    /// Replace an entry's title and content
    Edit {
        page: String,
        category: String,
        entry: String,
        title: String,
        content: String,

        /// Turn the entry into an info entry
        #[arg(long, conflicts_with = "copyable")]
        info: bool,

        /// Turn the entry into a copyable entry
        #[arg(long)]
        copyable: bool,
    },

    /// Remove an entry
    #[command(alias = "delete")]
    Rm {
        page: String,
        category: String,
        entry: String,
    },

    /// Copy a copyable entry's content to the clipboard
    #[command(alias = "cp")]
    Copy {
        page: String,
        category: String,
        entry: String,
    },
}
