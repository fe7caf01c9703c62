use crate::error::LoadError;
use crate::metadata::{Endpoint, SongMetadata};
use crate::parsing::{Table, parse_table, parse_weight};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

pub type NodeId = u32;

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

impl Edge {
    /// Trims both names and rejects blank endpoints and self-loops.
    pub fn new(source: &str, target: &str, weight: f64) -> Option<Self> {
        let source = source.trim();
        let target = target.trim();

        if source.is_empty() || target.is_empty() || source == target {
            return None;
        }

        Some(Self {
            source: source.to_string(),
            target: target.to_string(),
            weight,
        })
    }
}

/// Every distinct name seen as a source or target, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct NodeUniverse {
    names: Vec<String>,
    lookup: FxHashMap<String, NodeId>,
}

impl NodeUniverse {
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.names.len() as NodeId;
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.lookup.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id as usize]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (index as NodeId, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Directed weighted adjacency. Keys and each key's neighbors keep
/// first-insertion order; a repeated pair keeps its maximum weight.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    keys: Vec<NodeId>,
    slots: FxHashMap<NodeId, usize>,
    neighbors: Vec<Vec<(NodeId, f64)>>,
    edge_positions: FxHashMap<(NodeId, NodeId), usize>,
}

impl AdjacencyMap {
    pub fn insert_max(&mut self, from: NodeId, to: NodeId, weight: f64) {
        let slot = match self.slots.get(&from) {
            Some(&slot) => slot,
            None => {
                let slot = self.keys.len();
                self.keys.push(from);
                self.slots.insert(from, slot);
                self.neighbors.push(Vec::new());
                slot
            }
        };

        let row = &mut self.neighbors[slot];
        match self.edge_positions.get(&(from, to)) {
            Some(&position) => {
                let existing = &mut row[position].1;
                *existing = existing.max(weight);
            }
            None => {
                self.edge_positions.insert((from, to), row.len());
                row.push((to, weight.max(0.0)));
            }
        }
    }

    pub fn neighbors(&self, node: NodeId) -> Option<&[(NodeId, f64)]> {
        self.slot(node).map(|slot| self.neighbors[slot].as_slice())
    }

    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        let slot = self.slot(from)?;
        let position = *self.edge_positions.get(&(from, to))?;
        Some(self.neighbors[slot][position].1)
    }

    pub fn has_outgoing(&self, node: NodeId) -> bool {
        self.neighbors(node).is_some_and(|row| !row.is_empty())
    }

    /// Position of `node` among the keys, used to index score tables.
    pub fn slot(&self, node: NodeId) -> Option<usize> {
        self.slots.get(&node).copied()
    }

    pub fn keys(&self) -> &[NodeId] {
        &self.keys
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.keys.iter().zip(&self.neighbors).flat_map(|(&from, row)| {
            row.iter().map(move |&(to, weight)| (from, to, weight))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edge_positions.len()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    pub universe: NodeUniverse,
    pub forward: AdjacencyMap,
    pub reverse: AdjacencyMap,
    pub metadata: FxHashMap<NodeId, SongMetadata>,
}

impl SimilarityGraph {
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::default();
        for edge in edges {
            graph.add_edge(&edge);
        }
        graph
    }

    pub fn add_edge(&mut self, edge: &Edge) -> (NodeId, NodeId) {
        let source = self.universe.intern(&edge.source);
        let target = self.universe.intern(&edge.target);

        self.forward.insert_max(source, target, edge.weight);
        self.reverse.insert_max(target, source, edge.weight);

        (source, target)
    }

    pub fn adjacency(&self, direction: Direction) -> &AdjacencyMap {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }

    pub fn metadata_for(&self, id: NodeId) -> Option<&SongMetadata> {
        self.metadata.get(&id)
    }

    fn record_metadata(&mut self, id: NodeId, metadata: Option<SongMetadata>) {
        if let Some(metadata) = metadata {
            self.metadata.entry(id).or_insert(metadata);
        }
    }
}

/// Column positions the loader depends on.
struct EdgeColumns {
    source: usize,
    target: usize,
    value: usize,
}

impl EdgeColumns {
    fn locate(table: &Table) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            table
                .column_index(column)
                .ok_or(LoadError::MissingColumn(column))
        };

        Ok(Self {
            source: find("source")?,
            target: find("target")?,
            value: find("value")?,
        })
    }

    fn edge(&self, fields: &[String]) -> Option<Edge> {
        Edge::new(
            &fields[self.source],
            &fields[self.target],
            parse_weight(&fields[self.value]),
        )
    }
}

pub fn edges_from_table(table: &Table) -> Result<Vec<Edge>, LoadError> {
    let columns = EdgeColumns::locate(table)?;
    Ok(table
        .rows
        .iter()
        .filter_map(|fields| columns.edge(fields))
        .collect())
}

pub fn load_graph(content: &str) -> Result<SimilarityGraph, LoadError> {
    let table = parse_table(content);
    if table.headers.len() <= 1 && table.rows.is_empty() {
        return Ok(SimilarityGraph::default());
    }

    let columns = EdgeColumns::locate(&table)?;
    let mut graph = SimilarityGraph::default();
    let mut discarded_edges = 0;

    for record in table.records() {
        let Some(edge) = columns.edge(record.fields()) else {
            discarded_edges += 1;
            continue;
        };

        let (source, target) = graph.add_edge(&edge);
        graph.record_metadata(source, SongMetadata::from_record(&record, Endpoint::Source));
        graph.record_metadata(target, SongMetadata::from_record(&record, Endpoint::Target));
    }

    debug!(
        rows = table.rows.len(),
        skipped_rows = table.skipped_rows,
        discarded_edges,
        nodes = graph.universe.len(),
        edges = graph.forward.edge_count(),
        "loaded similarity table"
    );

    Ok(graph)
}

pub fn load_graph_from_path(path: &Path) -> Result<SimilarityGraph, LoadError> {
    let content = std::fs::read_to_string(path)?;
    load_graph(&content)
}
