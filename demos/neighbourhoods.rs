use std::error::Error;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vicinity::{
    graph::Graph,
    loader::{EdgeRecord, LoadOptions, NodeRecord},
    metrics::{global_metrics, rankings, region_metrics, top_by_degree},
    report::route,
    traversal::bfs,
};

// Rows as an external reader would hand them over.
#[derive(Deserialize)]
struct Rows {
    nodes: Vec<NodeRecord>,
    edges: Vec<EdgeRecord>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vicinity=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rows: Rows = serde_json::from_str(include_str!("../testdata/neighbourhoods.json"))?;
    let graph = Graph::from_records(rows.nodes, rows.edges, &LoadOptions::default())?;

    info!(order = graph.order(), size = graph.size(), "graph loaded");

    println!("\nGlobal metrics:");
    println!("{}", serde_json::to_string_pretty(&global_metrics(&graph))?);

    println!("\nRegion metrics:");
    println!("{}", serde_json::to_string_pretty(&region_metrics(&graph))?);

    println!("\nRankings:");
    println!("{}", serde_json::to_string_pretty(&rankings(&graph))?);

    let top = top_by_degree(&graph, 5);
    println!(
        "\nTop 5 by degree induce {} edges, density {:.3}",
        top.size(),
        top.density()
    );

    let tree = bfs(&graph, "Boa Vista")?;
    for (depth, layer) in tree.layers().iter().enumerate() {
        println!("Layer {depth}: {}", layer.join(", "));
    }

    // The last destination is not in the graph, so its route comes back empty.
    print_route(&graph, "Boa Vista", "Torre")?;
    print_route(&graph, "Nova Descoberta", "Boa Viagem")?;
    print_route(&graph, "Recife", "Jaqueira")?;

    Ok(())
}

fn print_route(graph: &Graph, origin: &str, destination: &str) -> Result<(), Box<dyn Error>> {
    println!("\nRoute {origin} -> {destination}:");
    println!("{}", serde_json::to_string_pretty(&route(graph, origin, destination))?);

    Ok(())
}
