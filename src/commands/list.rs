//! List registered cities

use crate::cli::Cli;
use crate::store::Store;
use urbe_core::error::Result;
use urbe_core::format::OutputFormat;

pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    let registry = store.load()?;
    let cities = registry.cities();

    match cli.format {
        OutputFormat::Json => {
            let payload: Vec<_> = cities
                .iter()
                .map(|city| serde_json::json!({ "id": city.id, "name": city.name }))
                .collect();
            println!("{}", serde_json::Value::Array(payload));
        }
        OutputFormat::Human => {
            if cities.is_empty() {
                if !cli.quiet {
                    println!("No cities registered");
                }
            } else {
                for city in cities {
                    println!("{} {}", city.id, city.name);
                }
            }
        }
    }

    Ok(())
}
