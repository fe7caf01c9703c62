use serde::{Deserialize, Serialize};
use songwalk_core::NodeKind;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct RecommendationQuery {
    pub song: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RecommendationResponse {
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GraphResponse {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_nodes: usize,
    pub total_links: usize,
    pub total_songs: usize,
}
