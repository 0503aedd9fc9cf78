//! Remove a city

use crate::cli::Cli;
use crate::store::Store;
use urbe_core::city::CityId;
use urbe_core::error::Result;
use urbe_core::format::OutputFormat;

pub fn execute(cli: &Cli, store: &Store, id: CityId) -> Result<()> {
    let mut registry = store.load()?;
    let city = registry.remove(id)?;
    store.save(&registry)?;

    match cli.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "id": city.id,
                "name": city.name,
                "cities": registry.len(),
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Removed city '{}' (id {})", city.name, id);
            }
        }
    }

    Ok(())
}
