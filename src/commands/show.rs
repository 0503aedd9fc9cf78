//! Show a registered city

use crate::cli::Cli;
use crate::store::Store;
use urbe_core::city::CityId;
use urbe_core::error::Result;
use urbe_core::format::OutputFormat;

pub fn execute(cli: &Cli, store: &Store, id: CityId) -> Result<()> {
    let registry = store.load()?;
    let city = registry.require(id)?;

    match cli.format {
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "id": city.id,
                "name": city.name,
                "vertices": city.routes.vertex_count(),
                "edges": city.routes.edge_count(),
            });
            println!("{}", payload);
        }
        OutputFormat::Human => {
            println!("{} {}", city.id, city.name);
            println!(
                "  {} vertices, {} route entries",
                city.routes.vertex_count(),
                city.routes.edge_count()
            );
        }
    }

    Ok(())
}
