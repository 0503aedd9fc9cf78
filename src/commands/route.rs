//! Route graph subcommands
//!
//! Each handler loads the registry, resolves the target city, and calls
//! into the core graph API; mutations save the registry back.

use crate::cli::{Cli, RouteCommands};
use crate::store::Store;
use urbe_core::city::CityId;
use urbe_core::error::Result;
use urbe_core::format::OutputFormat;
use urbe_core::graph::{self, RouteGraph};

pub fn dispatch(cli: &Cli, store: &Store, command: &RouteCommands) -> Result<()> {
    match command {
        RouteCommands::AddVertex { city, label } => add_vertex(cli, store, *city, label),
        RouteCommands::AddEdge {
            city,
            from,
            to,
            weight,
            directed,
        } => add_edge(cli, store, *city, from, to, *weight, *directed),
        RouteCommands::Show { city } => show(cli, store, *city),
        RouteCommands::Bfs { city, start } => bfs(cli, store, *city, start),
        RouteCommands::Dfs { city, start } => dfs(cli, store, *city, start),
        RouteCommands::Path { city, from, to } => path(cli, store, *city, from, to),
    }
}

fn add_vertex(cli: &Cli, store: &Store, city_id: CityId, label: &str) -> Result<()> {
    let mut registry = store.load()?;
    registry.require_mut(city_id)?.routes.add_vertex(label);
    store.save(&registry)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "city": city_id, "vertex": label })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Added vertex '{}'", label);
            }
        }
    }
    Ok(())
}

fn add_edge(
    cli: &Cli,
    store: &Store,
    city_id: CityId,
    from: &str,
    to: &str,
    weight: f64,
    directed: bool,
) -> Result<()> {
    let mut registry = store.load()?;
    registry
        .require_mut(city_id)?
        .routes
        .add_edge(from, to, weight, directed)?;
    store.save(&registry)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "city": city_id,
                    "from": from,
                    "to": to,
                    "weight": weight,
                    "directed": directed,
                })
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                let arrow = if directed { "->" } else { "<->" };
                println!("Added route {} {} {} (weight {})", from, arrow, to, weight);
            }
        }
    }
    Ok(())
}

fn show(cli: &Cli, store: &Store, city_id: CityId) -> Result<()> {
    let registry = store.load()?;
    let city = registry.require(city_id)?;

    match cli.format {
        OutputFormat::Json => output_graph_json(city_id, &city.routes),
        OutputFormat::Human => output_graph_human(&city.routes),
    }
    Ok(())
}

fn output_graph_json(city_id: CityId, routes: &RouteGraph) {
    let vertices: Vec<_> = routes
        .vertices()
        .into_iter()
        .map(|label| {
            let edges: Vec<_> = routes
                .neighbors(label)
                .unwrap_or_default()
                .iter()
                .map(|edge| serde_json::json!({ "to": edge.to, "weight": edge.weight }))
                .collect();
            serde_json::json!({ "label": label, "edges": edges })
        })
        .collect();
    println!(
        "{}",
        serde_json::json!({ "city": city_id, "vertices": vertices })
    );
}

fn output_graph_human(routes: &RouteGraph) {
    if routes.vertex_count() == 0 {
        println!("No vertices registered");
        return;
    }
    for label in routes.vertices() {
        println!("{}", label);
        for edge in routes.neighbors(label).unwrap_or_default() {
            println!("  -> {} ({})", edge.to, edge.weight);
        }
    }
}

fn bfs(cli: &Cli, store: &Store, city_id: CityId, start: &str) -> Result<()> {
    let registry = store.load()?;
    let city = registry.require(city_id)?;
    let order = graph::bfs(&city.routes, start)?;
    output_traversal(cli, city_id, start, &order);
    Ok(())
}

fn dfs(cli: &Cli, store: &Store, city_id: CityId, start: &str) -> Result<()> {
    let registry = store.load()?;
    let city = registry.require(city_id)?;
    let order = graph::dfs(&city.routes, start)?;
    output_traversal(cli, city_id, start, &order);
    Ok(())
}

fn output_traversal(cli: &Cli, city_id: CityId, start: &str, order: &[String]) {
    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "city": city_id, "start": start, "order": order })
            );
        }
        OutputFormat::Human => {
            println!("{}", order.join(" -> "));
        }
    }
}

fn path(cli: &Cli, store: &Store, city_id: CityId, from: &str, to: &str) -> Result<()> {
    let registry = store.load()?;
    let city = registry.require(city_id)?;
    let route = graph::shortest_path(&city.routes, from, to)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&route)?);
        }
        OutputFormat::Human => match route.cost {
            Some(cost) => println!("{} (cost {})", route.path.join(" -> "), cost),
            None => println!("No route from {} to {}", from, to),
        },
    }
    Ok(())
}
