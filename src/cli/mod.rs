//! CLI argument parsing for urbe
//!
//! Uses clap for argument parsing.
//! Supports global flags: --data, --format, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use urbe_core::city::CityId;
use urbe_core::format::OutputFormat;
use urbe_core::tree::Traversal;

use parse::{parse_format, parse_traversal};

/// Urbe - city registry and route graph CLI
#[derive(Parser, Debug)]
#[command(name = "urbe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data file
    #[arg(long, global = true, env = "URBE_DATA", default_value = "urbe.json")]
    pub data: PathBuf,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new city
    Add {
        /// City id (index key)
        id: CityId,

        /// City name
        name: String,
    },

    /// Show a registered city
    Show {
        /// City id
        id: CityId,
    },

    /// List cities in ascending id order
    List,

    /// Remove a city
    Remove {
        /// City id
        id: CityId,
    },

    /// Print city ids in tree traversal order
    Traverse {
        /// Traversal order (pre, in, post); all three when omitted
        #[arg(long, value_parser = parse_traversal)]
        order: Option<Traversal>,
    },

    /// Manage and query a city's route graph
    Route {
        #[command(subcommand)]
        command: RouteCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Register a neighborhood vertex
    AddVertex {
        /// City id
        city: CityId,

        /// Vertex label
        label: String,
    },

    /// Add a weighted route between two neighborhoods
    AddEdge {
        /// City id
        city: CityId,

        /// Origin vertex
        from: String,

        /// Destination vertex
        to: String,

        /// Edge weight (cost)
        #[arg(long, short, default_value_t = 1.0)]
        weight: f64,

        /// One-way route (default is both directions)
        #[arg(long)]
        directed: bool,
    },

    /// Show a city's vertices and routes
    Show {
        /// City id
        city: CityId,
    },

    /// Breadth-first traversal from a vertex
    Bfs {
        /// City id
        city: CityId,

        /// Start vertex
        start: String,
    },

    /// Depth-first traversal from a vertex
    Dfs {
        /// City id
        city: CityId,

        /// Start vertex
        start: String,
    },

    /// Shortest path between two vertices
    Path {
        /// City id
        city: CityId,

        /// Origin vertex
        from: String,

        /// Destination vertex
        to: String,
    },
}
