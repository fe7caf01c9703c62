use crate::error::ApiError;
use crate::models::{
    GraphLink, GraphNode, GraphResponse, HealthResponse, RecommendationQuery,
    RecommendationResponse, StatsResponse,
};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use songwalk_core::{
    NodeKind, RandSource, RecommendError, RecommendationConfig, Recommendations, SimilarityGraph,
    recommend,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Songwalk API is running".to_string(),
    })
}

pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let Query(params) = query?;
    let song = params.song.unwrap_or_default();
    if song.trim().is_empty() {
        return Err(RecommendError::MissingQuery.into());
    }

    let start_time = Instant::now();
    let graph = state.load_graph().await?;

    let config = match params.limit {
        Some(limit) => state.config.clone().with_max_results(limit),
        None => state.config.clone(),
    };

    let result = run_walk(&graph, &song, &config, state.seed)?;

    info!(
        query = %song,
        resolved = %result.resolved,
        direction = result.direction.as_str(),
        restarts = result.walk.restarts,
        duration_ms = start_time.elapsed().as_millis() as u64,
        "generated recommendations"
    );

    Ok(Json(RecommendationResponse {
        recommendations: result.songs,
        error: None,
    }))
}

fn run_walk(
    graph: &SimilarityGraph,
    song: &str,
    config: &RecommendationConfig,
    seed: Option<u64>,
) -> Result<Recommendations, RecommendError> {
    match seed {
        Some(seed) => {
            let mut source = RandSource::new(StdRng::seed_from_u64(seed));
            recommend(graph, song, config, &mut source)
        }
        None => {
            let mut source = RandSource::new(rand::rng());
            recommend(graph, song, config, &mut source)
        }
    }
}

pub async fn get_graph(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GraphResponse>, ApiError> {
    let graph = state.load_graph().await?;

    let nodes = graph
        .universe
        .iter()
        .map(|(id, name)| {
            let metadata = graph.metadata_for(id).cloned().unwrap_or_default();
            GraphNode {
                name: name.to_string(),
                kind: metadata.kind,
                artist: metadata.artist,
                tags: metadata.tags,
            }
        })
        .collect();

    let links = graph
        .forward
        .edges()
        .map(|(source, target, value)| GraphLink {
            source: graph.universe.name(source).to_string(),
            target: graph.universe.name(target).to_string(),
            value,
        })
        .collect();

    Ok(Json(GraphResponse { nodes, links }))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StatsResponse>, ApiError> {
    let graph = state.load_graph().await?;

    let total_songs = graph
        .universe
        .iter()
        .filter(|&(id, _)| {
            graph
                .metadata_for(id)
                .is_some_and(|metadata| metadata.kind == NodeKind::Song)
        })
        .count();

    Ok(Json(StatsResponse {
        total_nodes: graph.universe.len(),
        total_links: graph.forward.edge_count(),
        total_songs,
    }))
}
