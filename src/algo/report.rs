//! Combined centrality report
//!
//! Runs the selected metrics over one graph view and renders them in the
//! order Degree, Closeness, Betweenness.

use super::{
    betweenness_centrality_with_config, closeness_centrality, degree_centrality, AlgoResult,
    BetweennessConfig, GraphView, NodeId, Scores,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, info_span};

/// A centrality metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Degree,
    Closeness,
    Betweenness,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Degree, Metric::Closeness, Metric::Betweenness];

    /// Section heading used in text output
    pub fn title(self) -> &'static str {
        match self {
            Metric::Degree => "Degree Centrality",
            Metric::Closeness => "Closeness Centrality",
            Metric::Betweenness => "Betweenness Centrality (simplified)",
        }
    }
}

/// Which metrics a report computes, and how
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub betweenness: BetweennessConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metrics: Metric::ALL.to_vec(),
            betweenness: BetweennessConfig::default(),
        }
    }
}

impl ReportConfig {
    /// Report with a single metric
    pub fn only(metric: Metric) -> Self {
        Self {
            metrics: vec![metric],
            ..Self::default()
        }
    }

    fn wants(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }
}

/// Scores for every node, one map per computed metric.
///
/// All maps list nodes in the same order as `nodes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityReport {
    pub nodes: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<Scores<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closeness: Option<Scores<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub betweenness: Option<Scores<f64>>,
}

impl CentralityReport {
    /// Compute the configured metrics. The first failing metric aborts the
    /// whole report.
    pub fn compute(view: &GraphView, config: &ReportConfig) -> AlgoResult<Self> {
        let span = info_span!("centrality_report", nodes = view.node_count);
        let _guard = span.enter();

        let degree = config
            .wants(Metric::Degree)
            .then(|| degree_centrality(view));

        let closeness = if config.wants(Metric::Closeness) {
            Some(closeness_centrality(view)?)
        } else {
            None
        };

        let betweenness = if config.wants(Metric::Betweenness) {
            Some(betweenness_centrality_with_config(view, &config.betweenness)?)
        } else {
            None
        };

        info!(metrics = config.metrics.len(), "centrality report complete");

        Ok(Self {
            nodes: view.node_ids().collect(),
            degree,
            closeness,
            betweenness,
        })
    }

    /// Metrics present in this report, in display order
    pub fn metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|metric| match metric {
                Metric::Degree => self.degree.is_some(),
                Metric::Closeness => self.closeness.is_some(),
                Metric::Betweenness => self.betweenness.is_some(),
            })
            .collect()
    }

    /// Formatted score of `node` for `metric`: integers as is, floats with
    /// four decimals.
    pub fn format_score(&self, metric: Metric, node: NodeId) -> Option<String> {
        match metric {
            Metric::Degree => self.degree.as_ref()?.get(&node).map(|d| d.to_string()),
            Metric::Closeness => self.closeness.as_ref()?.get(&node).map(|s| format!("{s:.4}")),
            Metric::Betweenness => self
                .betweenness
                .as_ref()?
                .get(&node)
                .map(|s| format!("{s:.4}")),
        }
    }
}

impl fmt::Display for CentralityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, metric) in self.metrics().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", metric.title())?;
            for &node in &self.nodes {
                if let Some(score) = self.format_score(metric, node) {
                    writeln!(f, "Node {node}: {score}")?;
                }
            }
        }
        Ok(())
    }
}
