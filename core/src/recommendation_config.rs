use rustc_hash::FxHashSet;
use std::path::Path;

pub const DEFAULT_HUBS: [&str; 5] = [
    "Adelitas Way",
    "Scream",
    "Hate Love",
    "Dirty Little Thing",
    "It's Not Over",
];

/// Names that dominate walk visitation and get fewer result slots.
/// Membership is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct HubList {
    names: FxHashSet<String>,
}

impl HubList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Parses `"A, B,C"` into three hub names.
    pub fn from_comma_list(list: &str) -> Self {
        Self::new(list.split(',').map(str::trim))
    }

    /// One hub name per line; blank lines and `#` comments are ignored.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::new(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        ))
    }

    pub fn is_hub(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for HubList {
    fn default() -> Self {
        Self::new(DEFAULT_HUBS)
    }
}

/// Configuration for the random-walk recommender
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Number of walk steps per query
    pub walk_steps: usize,
    /// Maximum number of names returned
    pub max_results: usize,
    /// Top-ranked candidates considered before diversity filtering
    pub candidate_pool: usize,
    /// Leading slots reserved for non-hub names
    pub diverse_slots: usize,
    /// Hub names appended after the diverse ones
    pub hub_slots: usize,
    pub hubs: HubList,
}

impl RecommendationConfig {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_walk_steps(mut self, walk_steps: usize) -> Self {
        self.walk_steps = walk_steps;
        self
    }

    pub fn with_hubs(mut self, hubs: HubList) -> Self {
        self.hubs = hubs;
        self
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            walk_steps: 500,
            max_results: 5,
            candidate_pool: 10,
            diverse_slots: 3,
            hub_slots: 2,
            hubs: HubList::default(),
        }
    }
}
