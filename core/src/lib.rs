pub mod error;
pub mod graph;
pub mod metadata;
pub mod parsing;
pub mod ranking;
pub mod recommendation;
pub mod recommendation_config;
pub mod string_normalization;
pub mod walk;

// Re-export commonly used items
pub use error::{ErrorKind, LoadError, RecommendError};
pub use graph::{
    AdjacencyMap, Direction, Edge, NodeId, NodeUniverse, SimilarityGraph, edges_from_table,
    load_graph, load_graph_from_path,
};
pub use metadata::{NodeKind, SongMetadata};
pub use parsing::{RowOutcome, Table, parse_table};
pub use recommendation::{Recommendations, WalkSummary, recommend, resolve_song, suggestions};
pub use recommendation_config::{HubList, RecommendationConfig};
pub use walk::{RandSource, SequenceSource, UniformSource, WalkResult, random_walk};
