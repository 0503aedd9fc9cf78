//! Register a new city

use crate::cli::Cli;
use crate::store::Store;
use urbe_core::city::CityId;
use urbe_core::error::Result;
use urbe_core::format::OutputFormat;

pub fn execute(cli: &Cli, store: &Store, id: CityId, name: &str) -> Result<()> {
    let mut registry = store.load()?;
    registry.register(id, name)?;
    store.save(&registry)?;

    match cli.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "id": id,
                "name": name,
                "cities": registry.len(),
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Registered city '{}' (id {})", name, id);
            }
        }
    }

    Ok(())
}
