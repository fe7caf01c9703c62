use crate::Args;
use serde::{Deserialize, Serialize};
use songwalk_core::{RecommendError, Recommendations, SimilarityGraph};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub song: String,
    pub limit: usize,
    pub steps: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
    pub recommendations: Vec<JsonSong>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonSong {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub direction: String,
    pub restarts: usize,
    pub stalls: usize,
    pub search_time_ms: u64,
}

fn json_query(args: &Args) -> JsonQuery {
    JsonQuery {
        song: args.song.clone(),
        limit: args.limit,
        steps: args.steps,
        seed: args.seed,
    }
}

fn json_song(name: &str, graph: &SimilarityGraph) -> JsonSong {
    let artist = graph
        .universe
        .id(name)
        .and_then(|id| graph.metadata_for(id))
        .and_then(|metadata| metadata.artist.clone());

    JsonSong {
        name: name.to_string(),
        artist,
    }
}

pub fn create_json_output(
    outcome: &Result<Recommendations, RecommendError>,
    search_duration: f64,
    args: &Args,
    graph: &SimilarityGraph,
) -> JsonOutput {
    match outcome {
        Ok(result) => JsonOutput {
            query: json_query(args),
            result: JsonResult {
                found: true,
                resolved: Some(result.resolved.clone()),
                recommendations: result
                    .songs
                    .iter()
                    .map(|song| json_song(song, graph))
                    .collect(),
                error: None,
                error_kind: None,
            },
            stats: Some(JsonStats {
                direction: result.direction.as_str().to_string(),
                restarts: result.walk.restarts,
                stalls: result.walk.stalls,
                search_time_ms: (search_duration * 1000.0) as u64,
            }),
        },
        Err(error) => JsonOutput {
            query: json_query(args),
            result: JsonResult {
                found: false,
                resolved: None,
                recommendations: error
                    .suggestions()
                    .iter()
                    .map(|song| json_song(song, graph))
                    .collect(),
                error: Some(error.to_string()),
                error_kind: Some(error.kind().as_str().to_string()),
            },
            stats: None,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
