//! Print city ids in tree traversal order

use crate::cli::Cli;
use crate::store::Store;
use urbe_core::error::Result;
use urbe_core::format::OutputFormat;
use urbe_core::registry::CityRegistry;
use urbe_core::tree::Traversal;

pub fn execute(cli: &Cli, store: &Store, order: Option<Traversal>) -> Result<()> {
    let registry = store.load()?;

    let orders = match order {
        Some(order) => vec![order],
        None => vec![Traversal::Pre, Traversal::In, Traversal::Post],
    };

    match cli.format {
        OutputFormat::Json => output_json(&registry, &orders),
        OutputFormat::Human => output_human(cli, &registry, &orders),
    }

    Ok(())
}

fn output_json(registry: &CityRegistry, orders: &[Traversal]) {
    let mut payload = serde_json::Map::new();
    for &order in orders {
        payload.insert(
            order.to_string(),
            serde_json::json!(registry.ids(order)),
        );
    }
    println!("{}", serde_json::Value::Object(payload));
}

fn output_human(cli: &Cli, registry: &CityRegistry, orders: &[Traversal]) {
    if registry.is_empty() {
        if !cli.quiet {
            println!("No cities registered");
        }
        return;
    }

    for &order in orders {
        let ids: Vec<String> = registry
            .ids(order)
            .iter()
            .map(u32::to_string)
            .collect();
        println!("{}: {}", order, ids.join(" "));
    }
}
