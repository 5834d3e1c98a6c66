use anyhow::Result;
use centrality::{reference_graph, CentralityReport, ReportConfig};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Centrality Toolkit v{}", centrality::version());
    println!("==========================================");
    println!();

    let graph = reference_graph();
    println!("Sample graph ({} nodes):", graph.node_count());
    for (node, neighbors) in graph.iter() {
        println!("  {node} -> {neighbors:?}");
    }
    println!();

    let view = graph.to_view()?;
    let report = CentralityReport::compute(&view, &ReportConfig::default())?;
    print!("{report}");

    Ok(())
}
