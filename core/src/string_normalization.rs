pub fn normalize_name(input: &str) -> String {
    input.trim().to_lowercase()
}

pub fn names_match(candidate: &str, normalized_query: &str) -> bool {
    candidate.to_lowercase() == normalized_query
}
