//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::config::Traversal;

/// Classic data structures: search tree traversals, positional list moves, stack order
#[derive(Parser, Debug)]
#[command(name = "rsds")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Turn debugging information on (repeat for more: -d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// TOML config file (overrides compiled defaults)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a search tree and print its traversals
    Tree {
        /// Values to insert, the first is the root (default: config tree.values)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Traversal to print, repeatable (default: config tree.orders)
        #[arg(short, long, value_enum)]
        order: Vec<Traversal>,

        /// Print the tree shape
        #[arg(short, long)]
        render: bool,
    },

    /// Build a positional list by tail insertion and relocate or delete nodes
    ///
    /// Flags apply in a fixed order regardless of how they are given:
    /// --front, then --end, then --delete.
    #[command(after_help = "Flags apply in a fixed order: --front, then --end, then --delete.")]
    List {
        /// Values to append (default: config list.values)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Move the first node holding this value to the front
        #[arg(long, allow_negative_numbers = true)]
        front: Option<i64>,

        /// Move the first node holding this value to the end
        #[arg(long, allow_negative_numbers = true)]
        end: Option<i64>,

        /// Delete the first node holding this value
        #[arg(long, allow_negative_numbers = true)]
        delete: Option<i64>,
    },

    /// Push values onto a stack and pop them all
    Stack {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Print a commented config template
    Template,
}
