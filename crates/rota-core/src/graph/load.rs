//! Graph documents handed over by the persistence layer
//!
//! A document lists vertices (with opaque attributes) and edges. It can be written as
//! JSON, TOML or YAML; the file extension picks the parser.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RotaError};
use crate::graph::adjacency::Graph;

/// A vertex as persisted, with attributes the algorithms never look at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub label: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

/// An edge as persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
    /// Falls back to the configured default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<VertexRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Parse a document, choosing the format from the file extension.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(serde_json::from_str(content)?),
            "toml" => Ok(toml::from_str(content)?),
            "yaml" | "yml" => Ok(serde_yaml::from_str(content)?),
            other => Err(RotaError::invalid_value(
                "graph document extension",
                format!("{:?} (expected json, toml, yaml or yml)", other),
            )),
        }
    }
}

impl Graph {
    /// Build a graph from a document: vertices first, then edges in document order.
    pub fn from_document(doc: &GraphDocument, default_bidirectional: bool) -> Result<Self> {
        let mut graph = Graph::new();

        for vertex in &doc.vertices {
            graph.add_vertex(vertex.label.as_str());
        }

        for edge in &doc.edges {
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                crate::bail_invalid!(
                    "edge weight",
                    format!("{} -> {}: {}", edge.from, edge.to, edge.weight)
                );
            }
            graph.add_edge(
                &edge.from,
                &edge.to,
                edge.weight,
                edge.bidirectional.unwrap_or(default_bidirectional),
            );
        }

        Ok(graph)
    }
}

/// Read and parse a graph document from disk.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path, default_bidirectional: bool) -> Result<Graph> {
    let content = fs::read_to_string(path)?;
    let doc = GraphDocument::parse(&content, path)?;
    let graph = Graph::from_document(&doc, default_bidirectional)?;

    tracing::debug!(
        vertices = graph.vertex_count(),
        arcs = graph.arc_count(),
        "graph loaded"
    );
    Ok(graph)
}
