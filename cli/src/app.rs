use rand::SeedableRng;
use rand::rngs::StdRng;
use songwalk_core::{
    HubList, RandSource, RecommendError, RecommendationConfig, Recommendations, SimilarityGraph,
    load_graph_from_path, recommend,
};
use std::{error::Error, path::PathBuf};

use crate::args::Args;

pub struct SongwalkApp {
    pub table_path: PathBuf,
    pub config: RecommendationConfig,
    pub seed: Option<u64>,
}

impl SongwalkApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        if !args.table.exists() {
            return Err(format!("Similarity table does not exist: {:?}", args.table).into());
        }

        let hubs = if let Some(list) = &args.hubs {
            HubList::from_comma_list(list)
        } else if let Some(path) = &args.hubs_file {
            HubList::from_file(path)
                .map_err(|e| format!("Could not read hub list {:?}: {}", path, e))?
        } else {
            HubList::default()
        };

        let config = RecommendationConfig::default()
            .with_max_results(args.limit)
            .with_walk_steps(args.steps)
            .with_hubs(hubs);

        Ok(Self {
            table_path: args.table.clone(),
            config,
            seed: args.seed,
        })
    }

    pub fn load_graph(&self) -> Result<SimilarityGraph, Box<dyn Error>> {
        Ok(load_graph_from_path(&self.table_path)?)
    }

    pub fn recommend(
        &self,
        graph: &SimilarityGraph,
        song: &str,
    ) -> Result<Recommendations, RecommendError> {
        match self.seed {
            Some(seed) => {
                let mut source = RandSource::new(StdRng::seed_from_u64(seed));
                recommend(graph, song, &self.config, &mut source)
            }
            None => {
                let mut source = RandSource::new(rand::rng());
                recommend(graph, song, &self.config, &mut source)
            }
        }
    }
}
