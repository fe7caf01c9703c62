use crate::graph::{NodeId, NodeUniverse};
use crate::recommendation_config::RecommendationConfig;
use crate::string_normalization::names_match;

/// Turns a walk ranking into the final list: the queried song is dropped,
/// non-hub names lead and hub names fill the remaining slots.
pub fn curate(
    ranking: &[(NodeId, u32)],
    universe: &NodeUniverse,
    resolved: &str,
    config: &RecommendationConfig,
) -> Vec<String> {
    let resolved_lower = resolved.to_lowercase();
    let candidates: Vec<&str> = ranking
        .iter()
        .map(|&(id, _)| universe.name(id))
        .filter(|name| !names_match(name, &resolved_lower))
        .collect();

    let pool = &candidates[..candidates.len().min(config.candidate_pool)];
    let (hubs, others): (Vec<&str>, Vec<&str>) =
        pool.iter().copied().partition(|name| config.hubs.is_hub(name));

    let diverse: Vec<String> = others
        .into_iter()
        .take(config.diverse_slots)
        .chain(hubs.into_iter().take(config.hub_slots))
        .take(config.max_results)
        .map(str::to_string)
        .collect();

    if !diverse.is_empty() {
        return diverse;
    }

    candidates
        .into_iter()
        .take(config.max_results)
        .map(str::to_string)
        .collect()
}
