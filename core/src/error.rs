use thiserror::Error;

/// Failures reading a similarity table as a whole. Row-level problems never
/// surface here; malformed rows are dropped while parsing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read similarity table: {0}")]
    Io(#[from] std::io::Error),
    #[error("similarity table has no `{0}` column")]
    MissingColumn(&'static str),
}

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Song name is required")]
    MissingQuery,
    #[error("Result limit must be at least 1")]
    ZeroLimit,
    #[error("Song \"{query}\" not found. Available: {}", .suggestions.join(", "))]
    NotFound {
        query: String,
        suggestions: Vec<String>,
    },
    #[error("No connections found for \"{song}\". Try another song.")]
    NoConnections {
        song: String,
        suggestions: Vec<String>,
    },
    #[error("No recommendations found for \"{song}\"")]
    NoRecommendations { song: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    NoConnections,
    NoRecommendations,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not-found",
            ErrorKind::NoConnections => "no-connections",
            ErrorKind::NoRecommendations => "no-recommendations",
            ErrorKind::Internal => "internal",
        }
    }
}

impl RecommendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecommendError::MissingQuery | RecommendError::ZeroLimit => ErrorKind::Validation,
            RecommendError::NotFound { .. } => ErrorKind::NotFound,
            RecommendError::NoConnections { .. } => ErrorKind::NoConnections,
            RecommendError::NoRecommendations { .. } => ErrorKind::NoRecommendations,
        }
    }

    /// Names offered in place of recommendations when the query failed.
    pub fn suggestions(&self) -> &[String] {
        match self {
            RecommendError::NotFound { suggestions, .. }
            | RecommendError::NoConnections { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}
