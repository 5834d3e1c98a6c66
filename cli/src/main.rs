//! Centrality CLI — command-line interface for the Centrality Toolkit
//!
//! Loads an adjacency list from a JSON or YAML file (or uses the built-in
//! sample graph) and prints centrality scores, BFS distances or shortest
//! paths.

use anyhow::Result;
use centrality::algo::{all_shortest_paths, bfs_distances, UNREACHABLE};
use centrality::{
    load_graph, reference_graph, AdjacencyList, BetweennessConfig, CentralityReport, Metric,
    NodeId, Normalization, ReportConfig,
};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "centrality", version, about = "Node centrality for adjacency-list graphs")]
struct Cli {
    /// Graph file (.json, .yaml or .yml); the built-in sample graph is used when omitted
    #[arg(long, global = true, env = "CENTRALITY_GRAPH")]
    graph: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Text,
    Json,
    Csv,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum MetricArg {
    All,
    Degree,
    Closeness,
    Betweenness,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum NormalizationArg {
    /// Divide by (n-1)(n-2)/2
    Unordered,
    /// Divide by (n-1)(n-2)
    Ordered,
    /// Do not divide
    Raw,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute centrality scores
    Report {
        /// Metric to compute
        #[arg(long, default_value = "all")]
        metric: MetricArg,

        /// Betweenness normalization
        #[arg(long, default_value = "unordered")]
        normalization: NormalizationArg,
    },
    /// BFS distances from a source node (-1 marks unreachable nodes)
    Distances {
        source: NodeId,
    },
    /// Every shortest path between two nodes
    Paths {
        source: NodeId,
        target: NodeId,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = load(cli.graph.as_ref()).and_then(|graph| match cli.command {
        Commands::Report { metric, normalization } => {
            run_report(&graph, metric, normalization, cli.format)
        }
        Commands::Distances { source } => run_distances(&graph, source, cli.format),
        Commands::Paths { source, target } => run_paths(&graph, source, target, cli.format),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CENTRALITY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("centrality=warn,centrality_algorithms=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load(path: Option<&PathBuf>) -> Result<AdjacencyList> {
    Ok(match path {
        Some(path) => load_graph(path)?,
        None => reference_graph(),
    })
}

fn run_report(
    graph: &AdjacencyList,
    metric: MetricArg,
    normalization: NormalizationArg,
    format: OutputFormat,
) -> Result<()> {
    let metrics = match metric {
        MetricArg::All => Metric::ALL.to_vec(),
        MetricArg::Degree => vec![Metric::Degree],
        MetricArg::Closeness => vec![Metric::Closeness],
        MetricArg::Betweenness => vec![Metric::Betweenness],
    };
    let normalization = match normalization {
        NormalizationArg::Unordered => Normalization::UnorderedPairs,
        NormalizationArg::Ordered => Normalization::OrderedPairs,
        NormalizationArg::Raw => Normalization::Raw,
    };
    let config = ReportConfig {
        metrics,
        betweenness: BetweennessConfig { normalization },
    };

    let view = graph.to_view()?;
    let report = CentralityReport::compute(&view, &config)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print!("{report}");
        }
        OutputFormat::Csv | OutputFormat::Table => {
            let metrics = report.metrics();
            let mut header = vec!["node".to_string()];
            header.extend(metrics.iter().map(|m| column_name(*m).to_string()));

            let rows: Vec<Vec<String>> = report
                .nodes
                .iter()
                .map(|&node| {
                    let mut row = vec![node.to_string()];
                    row.extend(
                        metrics
                            .iter()
                            .map(|&m| report.format_score(m, node).unwrap_or_default()),
                    );
                    row
                })
                .collect();

            print_rows(format, header, rows);
        }
    }

    Ok(())
}

fn run_distances(graph: &AdjacencyList, source: NodeId, format: OutputFormat) -> Result<()> {
    let view = graph.to_view()?;
    let distances = bfs_distances(&view, source)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&distances)?);
        }
        OutputFormat::Text => {
            for (node, distance) in &distances {
                if *distance == UNREACHABLE {
                    println!("Node {node}: unreachable");
                } else {
                    println!("Node {node}: {distance}");
                }
            }
        }
        OutputFormat::Csv | OutputFormat::Table => {
            let rows = distances
                .iter()
                .map(|(node, distance)| vec![node.to_string(), distance.to_string()])
                .collect();
            print_rows(format, vec!["node".into(), "distance".into()], rows);
        }
    }

    Ok(())
}

fn run_paths(
    graph: &AdjacencyList,
    source: NodeId,
    target: NodeId,
    format: OutputFormat,
) -> Result<()> {
    let view = graph.to_view()?;
    let paths = all_shortest_paths(&view, source, target)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&paths)?);
        }
        OutputFormat::Text => {
            if paths.is_empty() {
                println!("(no path from {source} to {target})");
            }
            for path in &paths {
                println!("{}", join_path(path, " -> "));
            }
        }
        OutputFormat::Csv | OutputFormat::Table => {
            let rows = paths
                .iter()
                .map(|path| vec![(path.len() - 1).to_string(), join_path(path, " ")])
                .collect();
            print_rows(format, vec!["hops".into(), "path".into()], rows);
        }
    }

    Ok(())
}

fn print_rows(format: OutputFormat, header: Vec<String>, rows: Vec<Vec<String>>) {
    if let OutputFormat::Csv = format {
        println!("{}", header.join(","));
        for row in &rows {
            let cells: Vec<String> = row.iter().map(|c| format_csv_value(c)).collect();
            println!("{}", cells.join(","));
        }
        return;
    }

    if rows.is_empty() {
        println!("(no results)");
        return;
    }

    let row_count = rows.len();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    for row in rows {
        table.add_row(row);
    }

    println!("{}", table);
    println!("{} row(s)", row_count);
}

fn column_name(metric: Metric) -> &'static str {
    match metric {
        Metric::Degree => "degree",
        Metric::Closeness => "closeness",
        Metric::Betweenness => "betweenness",
    }
}

fn join_path(path: &[NodeId], sep: &str) -> String {
    path.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(sep)
}

fn format_csv_value(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
