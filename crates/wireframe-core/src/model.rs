//! Wireframe model: world-space vertices connected by edges.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{Result, WireframeError};

/// An ordered pair of vertex indices.
///
/// Serialized as a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Edge {
    /// Index of the first endpoint.
    pub start: usize,
    /// Index of the second endpoint.
    pub end: usize,
}

impl Edge {
    /// Creates a new edge between two vertex indices.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl From<[usize; 2]> for Edge {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<Edge> for [usize; 2] {
    fn from(edge: Edge) -> Self {
        [edge.start, edge.end]
    }
}

/// A wireframe model.
///
/// Every edge index is guaranteed to be within `0..vertices.len()`. The check
/// happens once, when the model is constructed or deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModel")]
pub struct Model {
    vertices: Vec<DVec3>,
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct RawModel {
    vertices: Vec<DVec3>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl TryFrom<RawModel> for Model {
    type Error = WireframeError;

    fn try_from(raw: RawModel) -> Result<Self> {
        Self::new(raw.vertices, raw.edges)
    }
}

impl Model {
    /// Creates a model, validating that every edge refers to an existing vertex.
    ///
    /// Self-loop edges are accepted but logged, since they only ever cover a
    /// single pixel.
    pub fn new(vertices: Vec<DVec3>, edges: Vec<Edge>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (i, edge) in edges.iter().enumerate() {
            for index in [edge.start, edge.end] {
                if index >= vertex_count {
                    return Err(WireframeError::EdgeIndexOutOfRange {
                        edge: i,
                        index,
                        vertex_count,
                    });
                }
            }
            if edge.is_degenerate() {
                log::warn!("edge {i} connects vertex {} to itself", edge.start);
            }
        }
        Ok(Self { vertices, edges })
    }

    /// Creates a closed loop (0-1-2-...-n-0).
    pub fn closed_loop(vertices: Vec<DVec3>) -> Self {
        let n = vertices.len();
        let edges = if n < 2 {
            Vec::new()
        } else {
            (0..n).map(|i| Edge::new(i, (i + 1) % n)).collect()
        };
        Self { vertices, edges }
    }

    /// Creates an open polyline (0-1-2-...-n).
    pub fn polyline(vertices: Vec<DVec3>) -> Self {
        let n = vertices.len();
        let edges = (1..n).map(|i| Edge::new(i - 1, i)).collect();
        Self { vertices, edges }
    }

    /// Parses a model from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a model from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let model = Self::from_json_str(&contents)?;
        log::debug!(
            "loaded model from {}: {} vertices, {} edges",
            path.display(),
            model.num_vertices(),
            model.num_edges()
        );
        Ok(model)
    }

    /// Writes the model to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Returns the world-space vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}
