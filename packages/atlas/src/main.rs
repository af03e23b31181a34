//! Thin driver: load labeled point records, build the proximity graph, and
//! report shortest-path reach and betweenness centrality.
//!
//! Usage: `atlas [records.json]` where the file holds an array of
//! `{"label": ..., "x": ..., "y": ...}` objects. Without an argument a small
//! built-in set of Italian city coordinates is used.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use proxigraph::{Engine, GraphBase, ProximityConfig, betweenness, build_graph, reconstruct_all};

#[derive(Debug, Deserialize)]
struct PointRecord {
    label: String,
    x: f64,
    y: f64,
}

fn sample_records() -> Vec<PointRecord> {
    // longitude/latitude pairs; with d = 0.8 the northern cities cluster
    // while the islands stay disconnected
    let cities = [
        ("Torino", 7.68, 45.07),
        ("Milano", 9.19, 45.46),
        ("Bergamo", 9.67, 45.69),
        ("Brescia", 10.22, 45.54),
        ("Verona", 10.99, 45.44),
        ("Venezia", 12.33, 45.44),
        ("Bologna", 11.34, 44.49),
        ("Firenze", 11.25, 43.77),
        ("Roma", 12.48, 41.89),
        ("Napoli", 14.25, 40.85),
        ("Cagliari", 9.11, 39.22),
        ("Palermo", 13.36, 38.11),
    ];
    cities
        .into_iter()
        .map(|(label, x, y)| PointRecord {
            label: label.to_string(),
            x,
            y,
        })
        .collect()
}

fn load_records(path: &str) -> Result<Vec<PointRecord>> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading records from {path}"))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing records from {path}"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let records = match std::env::args().nth(1) {
        Some(path) => load_records(&path)?,
        None => sample_records(),
    };
    info!(records = records.len(), "loaded point records");

    let graph = build_graph(
        records.into_iter().map(|r| (r.label, r.x, r.y)),
        &ProximityConfig::default(),
    )?;
    println!("graph: {} nodes, {} edges", graph.order(), graph.size());

    if let Some(first) = graph.node_ids().next() {
        let source = graph.node_key(first).clone();
        for engine in [Engine::FullRelaxation, Engine::QueuePropagation] {
            let paths = reconstruct_all(&graph, &source, engine)?;
            println!("{engine:?}: {} nodes reachable from {source}", paths.len());
        }
    }

    println!("betweenness ranking:");
    let result = betweenness(&graph);
    for (label, score) in result.ranked().into_iter().take(10) {
        println!("  {score:.4}  {label}");
    }

    Ok(())
}
