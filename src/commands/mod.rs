//! Command implementations for urbe

mod add;
mod list;
mod remove;
mod route;
mod show;
mod traverse;

use crate::cli::{Cli, Commands};
use crate::store::Store;
use urbe_core::error::Result;

/// Execute the parsed command
pub fn dispatch(cli: &Cli) -> Result<()> {
    let store = Store::open(&cli.data);

    match &cli.command {
        Commands::Add { id, name } => add::execute(cli, &store, *id, name),
        Commands::Show { id } => show::execute(cli, &store, *id),
        Commands::List => list::execute(cli, &store),
        Commands::Remove { id } => remove::execute(cli, &store, *id),
        Commands::Traverse { order } => traverse::execute(cli, &store, *order),
        Commands::Route { command } => route::dispatch(cli, &store, command),
    }
}
