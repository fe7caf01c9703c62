use crate::error::RecommendError;
use crate::graph::{Direction, NodeId, SimilarityGraph};
use crate::ranking::curate;
use crate::recommendation_config::RecommendationConfig;
use crate::string_normalization::{names_match, normalize_name};
use crate::walk::{UniformSource, random_walk};
use serde::Serialize;

const SUGGESTION_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalkSummary {
    pub steps: usize,
    pub restarts: usize,
    pub stalls: usize,
    /// Highest visit counts, query node excluded
    pub top_visits: Vec<(String, u32)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub query: String,
    pub resolved: String,
    pub direction: Direction,
    pub songs: Vec<String>,
    pub walk: WalkSummary,
}

/// Finds the node whose name equals the query after trimming, ignoring case.
/// The earliest-seen name wins when several match.
pub fn resolve_song(graph: &SimilarityGraph, query: &str) -> Option<NodeId> {
    let normalized_query = normalize_name(query);
    graph
        .universe
        .iter()
        .find(|(_, name)| names_match(name, &normalized_query))
        .map(|(id, _)| id)
}

/// First few node names that are not artist placeholders.
pub fn suggestions(graph: &SimilarityGraph) -> Vec<String> {
    graph
        .universe
        .iter()
        .map(|(_, name)| name)
        .filter(|name| !name.to_lowercase().contains("artist"))
        .take(SUGGESTION_COUNT)
        .map(str::to_string)
        .collect()
}

/// Forward edges when the node has any, otherwise its incoming edges.
pub fn select_direction(graph: &SimilarityGraph, node: NodeId) -> Option<Direction> {
    if graph.forward.has_outgoing(node) {
        Some(Direction::Forward)
    } else if graph.reverse.has_outgoing(node) {
        Some(Direction::Reverse)
    } else {
        None
    }
}

pub fn recommend<S>(
    graph: &SimilarityGraph,
    query: &str,
    config: &RecommendationConfig,
    source: &mut S,
) -> Result<Recommendations, RecommendError>
where
    S: UniformSource + ?Sized,
{
    if query.trim().is_empty() {
        return Err(RecommendError::MissingQuery);
    }
    if config.max_results == 0 {
        return Err(RecommendError::ZeroLimit);
    }

    let start = resolve_song(graph, query).ok_or_else(|| RecommendError::NotFound {
        query: query.to_string(),
        suggestions: suggestions(graph),
    })?;
    let resolved = graph.universe.name(start).to_string();

    let direction = select_direction(graph, start).ok_or_else(|| RecommendError::NoConnections {
        song: resolved.clone(),
        suggestions: suggestions(graph),
    })?;

    let walk = random_walk(graph.adjacency(direction), start, config.walk_steps, source);
    let songs = curate(&walk.ranking, &graph.universe, &resolved, config);

    if songs.is_empty() {
        return Err(RecommendError::NoRecommendations { song: resolved });
    }

    let resolved_lower = normalize_name(&resolved);
    let top_visits = walk
        .ranking
        .iter()
        .map(|&(id, score)| (graph.universe.name(id), score))
        .filter(|(name, _)| !names_match(name, &resolved_lower))
        .take(config.candidate_pool)
        .map(|(name, score)| (name.to_string(), score))
        .collect();

    Ok(Recommendations {
        query: query.to_string(),
        resolved,
        direction,
        songs,
        walk: WalkSummary {
            steps: config.walk_steps,
            restarts: walk.restarts,
            stalls: walk.stalls,
            top_visits,
        },
    })
}
