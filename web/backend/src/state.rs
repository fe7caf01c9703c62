use songwalk_core::{HubList, LoadError, RecommendationConfig, SimilarityGraph, load_graph};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_TABLE_PATH: &str = "public/subgraph.csv";

/// Request-independent settings. The similarity table itself is read again
/// for every request, so edits to the file show up without a restart.
#[derive(Debug, Clone)]
pub struct AppState {
    pub table_path: PathBuf,
    pub config: RecommendationConfig,
    /// Fixed walk seed; each request draws fresh randomness when unset
    pub seed: Option<u64>,
}

impl AppState {
    pub fn new(table_path: impl Into<PathBuf>, config: RecommendationConfig) -> Self {
        Self {
            table_path: table_path.into(),
            config,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_env() -> Self {
        let table_path =
            std::env::var("SUBGRAPH_PATH").unwrap_or_else(|_| DEFAULT_TABLE_PATH.to_string());

        let mut config = RecommendationConfig::default();

        if let Ok(steps) = std::env::var("WALK_STEPS") {
            match steps.trim().parse::<usize>() {
                Ok(steps) => config = config.with_walk_steps(steps),
                Err(_) => warn!(value = %steps, "ignoring invalid WALK_STEPS"),
            }
        }

        if let Ok(hubs) = std::env::var("SONGWALK_HUBS") {
            config = config.with_hubs(HubList::from_comma_list(&hubs));
        }

        let state = Self::new(table_path, config);
        match std::env::var("WALK_SEED").ok().map(|seed| seed.trim().parse::<u64>()) {
            Some(Ok(seed)) => state.with_seed(seed),
            Some(Err(_)) => {
                warn!("ignoring invalid WALK_SEED");
                state
            }
            None => state,
        }
    }

    pub async fn load_graph(&self) -> Result<SimilarityGraph, LoadError> {
        let content = tokio::fs::read_to_string(&self.table_path).await?;
        load_graph(&content)
    }
}
